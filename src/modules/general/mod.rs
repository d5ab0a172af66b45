//! General module.
//!
//! Reference collections (gender, blood group, designation, ...) and
//! guardians. Every collection here is a plain [`Repository`](crate::repository::Repository).

pub mod model;
pub mod service;

pub use service::GeneralService;
