//! # Boarding Core
//!
//! Core types, errors, and utilities shared by every Boarding crate.
//!
//! - [`errors`]: the application error type and result alias
//! - [`pagination`]: page/limit parameters and the paginated envelope
//! - [`validation`]: field-path error maps and reusable field validators
//! - [`search`]: case-insensitive search term matching for list filters
//! - [`operation`]: the repository operations, used for latency and metrics
//! - [`serde`]: custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use boarding_core::errors::AppError;
//! use boarding_core::pagination::{ListQuery, paginate};
//!
//! let error = AppError::not_found("Gender", "g42");
//! assert_eq!(error.to_string(), "Gender not found");
//!
//! let page = paginate(vec![1, 2, 3], 1, 2);
//! assert_eq!(page.total_pages, 2);
//! ```

pub mod errors;
pub mod operation;
pub mod pagination;
pub mod search;
pub mod serde;
pub mod validation;

pub use errors::{AppError, AppResult};
pub use operation::Operation;
pub use pagination::{ListQuery, Paginated, PaginationParams, paginate};
pub use search::SearchTerm;
pub use validation::{FieldErrors, validate_payload};
