//! Application error type shared by repositories, services and the CLI.

use crate::validation::FieldErrors;

/// Error type for every repository and service operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// The payload broke its schema contract. Carries the field-path map.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// Reserved for uniqueness checks. Nothing in the base data layer raises it.
    #[error("{0}")]
    Conflict(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the field errors when this is a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Short machine-friendly label, used as a metric and log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound { .. } => "not_found",
            Self::Conflict(_) => "conflict",
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let error = AppError::not_found("Blood Group", "bg99");
        assert_eq!(error.to_string(), "Blood Group not found");
        assert!(error.is_not_found());
        assert_eq!(error.kind(), "not_found");
    }

    #[test]
    fn test_validation_error_exposes_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        let error = AppError::from(errors);

        let fields = error.field_errors().unwrap();
        assert_eq!(fields.get("name"), Some("Name is required"));
        assert_eq!(error.to_string(), "Validation failed: name: Name is required");
    }

    #[test]
    fn test_conflict_message() {
        let error = AppError::conflict("Name already exists");
        assert_eq!(error.to_string(), "Name already exists");
        assert!(error.field_errors().is_none());
    }
}
