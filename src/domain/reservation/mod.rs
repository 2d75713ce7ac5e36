//! Reservation aggregate
//!
//! Contains the Reservation entity, booking request/update types and the
//! repository interface. This is the core aggregate of the service.

pub mod model;
pub mod repository;

pub use model::{
    BookingRequest, CourtUsage, Reservation, ReservationDetails, ReservationFilter,
    ReservationUpdate,
};
pub use repository::ReservationRepository;
