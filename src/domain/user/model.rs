//! User domain entity

/// A registered user (usuario).
///
/// Created explicitly via the users endpoint or implicitly during
/// reservation creation (lookup by email, create if absent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Unique across all users
    pub email: String,
    pub phone: Option<String>,
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}
