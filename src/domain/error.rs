//! Domain errors

use thiserror::Error;

/// Domain-level error types.
///
/// Every variant carries the human-readable message surfaced to the caller;
/// the HTTP layer maps the variant itself to a status code.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// A referenced row (court, payment method, ...) does not exist
    #[error("{0}")]
    InvalidReference(String),

    /// Uniqueness violation: duplicate name/email or a double-booked slot
    #[error("{0}")]
    Conflict(String),

    /// An id did not resolve to a row
    #[error("{0}")]
    NotFound(String),

    /// Admin key mismatch
    #[error("{0}")]
    Forbidden(String),

    /// Storage/database error
    #[error("Error de base de datos: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
