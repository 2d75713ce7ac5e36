//! Court aggregate
//!
//! Contains the Court entity, update/detail types and repository interface.

pub mod model;
pub mod repository;

pub use model::{Court, CourtDetails, CourtUpdate, NewCourt};
pub use repository::CourtRepository;
