//! Reference data aggregate
//!
//! Immutable-in-practice lookup rows: venues (sucursales), court types
//! (tipos de cancha) and payment methods (pagos).

pub mod model;
pub mod repository;

pub use model::{CourtType, PaymentMethod, Venue};
pub use repository::ReferenceDataRepository;
