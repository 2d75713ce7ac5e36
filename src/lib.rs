//! # Court Booking Service
//!
//! Booking management service for sports facilities: venues, court types,
//! courts, users, payment methods and reservations over a JSON REST API.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic, including the reservation booking workflow
//! - **infrastructure**: External concerns (database, migrations, seed data)
//! - **interfaces**: HTTP REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_router;
