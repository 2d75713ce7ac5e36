//! SeaORM entities
//!
//! Table and column names keep the legacy Spanish schema so an existing
//! `reservas.db` file keeps working unchanged.

pub mod court;
pub mod court_type;
pub mod payment_method;
pub mod reservation;
pub mod user;
pub mod venue;
