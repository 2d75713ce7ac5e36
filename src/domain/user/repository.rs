//! User repository interface

use async_trait::async_trait;

use super::model::{NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return its generated id.
    ///
    /// Fails with `Conflict` when the email is already registered.
    async fn insert(&self, user: NewUser) -> DomainResult<i32>;

    /// Find a user by id
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;

    /// Find a user by email (unique)
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// List all users
    async fn find_all(&self) -> DomainResult<Vec<User>>;
}
