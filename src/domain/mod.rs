//! Domain layer
//!
//! Entities, per-aggregate repository traits and domain errors.
//! The repository traits are implemented in `infrastructure::database`.

pub mod court;
pub mod error;
pub mod reference;
pub mod repositories;
pub mod reservation;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
