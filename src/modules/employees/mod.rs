//! Employees module.
//!
//! Staff members and teachers share one profile and one service type,
//! parameterized by the entity.

pub mod model;
pub mod service;

pub use service::{EmployeeService, StaffService, TeacherService};
