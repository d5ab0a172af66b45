//! Students module.

pub mod model;
pub mod service;

pub use service::StudentService;
