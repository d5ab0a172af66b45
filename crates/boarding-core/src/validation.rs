//! Field-path validation errors and reusable field validators.
//!
//! DTOs are validated with `validator` derive. [`validate_payload`] runs the
//! derived rules and flattens the nested `ValidationErrors` tree into a
//! [`FieldErrors`] map keyed by camelCase paths, with list indices in brackets:
//!
//! ```text
//! professionalExperience[0].endDate -> End date must be after start date
//! presentAddress.divisionId         -> ...
//! ```
//!
//! The `validate_*` functions are meant for `#[validate(custom(function = ...))]`.
//! Optional email and URL validators treat an empty string as "not provided".

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError, ValidationErrors, ValidationErrorsKind};

pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[1-9]\d{0,15}$").expect("valid phone regex"));

pub static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid year regex"));

/// Validation failures keyed by camelCase field path.
///
/// Keeps the first message reported for each path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (path, message) in other.0 {
            self.insert(path, message);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(path, message)| format!("{path}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        collect(errors, "", &mut out);
        out
    }
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let field: &str = field;
        let name = to_camel_case(field);
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(first) = list.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    out.insert(path, message);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Runs the derived `validator` rules and flattens any failures.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), FieldErrors> {
    payload.validate().map_err(|errors| FieldErrors::from(&errors))
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(invalid("phone", "Invalid phone number format"))
    }
}

pub fn validate_mobile_number(value: &str) -> Result<(), ValidationError> {
    validate_phone(value).map_err(|_| invalid("phone", "Invalid mobile number format"))
}

pub fn validate_contact_number(value: &str) -> Result<(), ValidationError> {
    validate_phone(value).map_err(|_| invalid("phone", "Invalid contact number format"))
}

/// Email that may be left blank.
pub fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(invalid("email", "Invalid email format"))
    }
}

/// URL that may be left blank.
pub fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(invalid("url", "Invalid URL"))
    }
}

pub fn validate_year(value: &str) -> Result<(), ValidationError> {
    if YEAR_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(invalid("year", "Year must be a valid 4-digit year"))
    }
}

/// Rejects a blank foreign-key id.
pub fn validate_required_id<T: AsRef<str>>(value: &T) -> Result<(), ValidationError> {
    if value.as_ref().trim().is_empty() {
        Err(invalid("required", "This field is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Item {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
        #[validate(custom(function = "validate_optional_email"))]
        contact_email: Option<String>,
    }

    #[derive(Validate)]
    struct Parent {
        #[validate(length(min = 1, max = 5, message = "Name too long"))]
        full_name: String,
        #[validate(nested)]
        line_items: Vec<Item>,
    }

    #[test]
    fn test_phone_pattern() {
        assert!(validate_phone("+8801711001100").is_ok());
        assert!(validate_phone("01711001100").is_err());
        assert!(validate_phone("+12345678901234567").is_err());
        assert!(validate_phone("12a4").is_err());
    }

    #[test]
    fn test_phone_message_variants() {
        let err = validate_mobile_number("abc").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Invalid mobile number format"));
        let err = validate_contact_number("abc").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Invalid contact number format"));
    }

    #[test]
    fn test_optional_email_allows_blank() {
        assert!(validate_optional_email("").is_ok());
        assert!(validate_optional_email("karim@example.com").is_ok());
        assert!(validate_optional_email("karim@").is_err());
    }

    #[test]
    fn test_optional_url_allows_blank() {
        assert!(validate_optional_url("").is_ok());
        assert!(validate_optional_url("https://linkedin.com/in/karim").is_ok());
        assert!(validate_optional_url("not a url").is_err());
    }

    #[test]
    fn test_year_pattern() {
        assert!(validate_year("2004").is_ok());
        assert!(validate_year("04").is_err());
        assert!(validate_year("20045").is_err());
    }

    #[test]
    fn test_required_id() {
        assert!(validate_required_id(&"g1").is_ok());
        assert!(validate_required_id(&"  ").is_err());
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("end_date"), "endDate");
        assert_eq!(to_camel_case("professional_experience"), "professionalExperience");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_flattens_nested_list_paths() {
        let parent = Parent {
            full_name: "Too long name".into(),
            line_items: vec![
                Item {
                    title: "ok".into(),
                    contact_email: None,
                },
                Item {
                    title: String::new(),
                    contact_email: Some("broken@".into()),
                },
            ],
        };

        let errors = validate_payload(&parent).unwrap_err();
        assert_eq!(errors.get("fullName"), Some("Name too long"));
        assert_eq!(errors.get("lineItems[1].title"), Some("Title is required"));
        assert_eq!(
            errors.get("lineItems[1].contactEmail"),
            Some("Invalid email format")
        );
        assert!(!errors.contains("lineItems[0].title"));
    }

    #[test]
    fn test_valid_payload_passes() {
        let parent = Parent {
            full_name: "Ok".into(),
            line_items: vec![Item {
                title: "first".into(),
                contact_email: Some(String::new()),
            }],
        };
        assert!(validate_payload(&parent).is_ok());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
