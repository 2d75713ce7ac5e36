//! Reference data entities

/// Venue (sucursal) where courts are located
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

/// Court type (tipo de cancha), e.g. "Fútbol 5"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtType {
    pub id: i32,
    pub name: String,
}

/// Payment method label (pago). A label only, never a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: i32,
    pub method: String,
}
