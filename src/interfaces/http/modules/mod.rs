//! HTTP resource modules, one per surface area

pub mod courts;
pub mod reference;
pub mod reservations;
pub mod summary;
pub mod users;
