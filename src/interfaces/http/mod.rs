//! HTTP REST API
//!
//! - `common`: error mapping and the validating JSON extractor
//! - `modules`: one module per resource (dto + handlers)
//! - `router`: axum router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_router, AppState};
