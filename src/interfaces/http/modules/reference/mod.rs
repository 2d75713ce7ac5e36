//! Reference data endpoints: tipos, sucursales, pagos

pub mod dto;
pub mod handlers;
