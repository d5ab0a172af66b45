//! Guardian domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use boarding_core::serde::empty_string_as_none;
use boarding_core::validation::{validate_optional_email, validate_optional_url, validate_phone};

use crate::address::{Address, sync_same_as_present};
use crate::common::{Identified, Named};
use crate::ids::GuardianId;
use crate::rules;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub id: GuardianId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<Address>,
    #[serde(default)]
    pub same_as_present: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Guardian {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Named for Guardian {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuardianDto {
    #[validate(custom(function = "rules::guardian_name"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::occupation"))]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_url"))]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::details"))]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<Address>,
    #[serde(default)]
    pub same_as_present: bool,
}

impl CreateGuardianDto {
    /// Mirrors the present address into the permanent one when the form's
    /// "same as present" box is ticked.
    pub fn apply_same_as_present(&mut self) {
        sync_same_as_present(
            self.same_as_present,
            &self.present_address,
            &mut self.permanent_address,
        );
    }
}

/// Form value for editing an existing guardian.
impl From<&Guardian> for CreateGuardianDto {
    fn from(guardian: &Guardian) -> Self {
        Self {
            name: guardian.name.clone(),
            phone: guardian.phone.clone(),
            email: guardian.email.clone(),
            occupation: guardian.occupation.clone(),
            photo_url: guardian.photo_url.clone(),
            details: guardian.details.clone(),
            present_address: guardian.present_address.clone(),
            permanent_address: guardian.permanent_address.clone(),
            same_as_present: guardian.same_as_present,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuardianDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::guardian_name"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::occupation"))]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_url"))]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::details"))]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_as_present: Option<bool>,
}

impl UpdateGuardianDto {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Guardians search across name, email, phone and occupation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardianFilterParams {
    #[serde(default, deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateGuardianDto {
        CreateGuardianDto {
            name: "Abdul Karim".into(),
            phone: Some("+8801711001100".into()),
            email: Some("abdul.karim@example.com".into()),
            occupation: Some("Businessman".into()),
            ..CreateGuardianDto::default()
        }
    }

    #[test]
    fn test_create_guardian_dto_validation() {
        assert!(valid_dto().validate().is_ok());

        let blank_email = CreateGuardianDto {
            email: Some(String::new()),
            ..valid_dto()
        };
        assert!(blank_email.validate().is_ok());

        let bad_phone = CreateGuardianDto {
            phone: Some("017-11".into()),
            ..valid_dto()
        };
        assert!(bad_phone.validate().is_err());

        let no_name = CreateGuardianDto {
            name: String::new(),
            ..valid_dto()
        };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_apply_same_as_present() {
        let present = Address {
            division_id: Some("d2".into()),
            ..Address::default()
        };
        let mut dto = CreateGuardianDto {
            present_address: Some(present.clone()),
            same_as_present: true,
            ..valid_dto()
        };
        dto.apply_same_as_present();
        assert_eq!(dto.permanent_address, Some(present));
    }

    #[test]
    fn test_update_dto_empty() {
        assert!(UpdateGuardianDto::default().is_empty());
        let dto: UpdateGuardianDto = serde_json::from_str(r#"{"occupation": "Farmer"}"#).unwrap();
        assert!(!dto.is_empty());
        assert_eq!(dto.occupation.as_deref(), Some("Farmer"));
    }
}
