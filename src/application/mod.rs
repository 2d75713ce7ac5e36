//! Application layer
//!
//! Use cases orchestrating the domain repositories.

pub mod booking;

pub use booking::{BookingPolicy, BookingService, SummaryStats};
