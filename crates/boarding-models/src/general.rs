//! Reference ("general") entities and their DTOs.
//!
//! Gender, blood group, residential status, religion, designation, relation,
//! marital status and job rule all share the `{id, name, createdAt, updatedAt?}`
//! shape and the same create/update/filter DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use boarding_core::serde::empty_string_as_none;

use crate::common::{Identified, Named};
use crate::ids::{
    BloodGroupId, DesignationId, GenderId, JobRuleId, MaritalStatusId, RelationId, ReligionId,
    ResidentialStatusId,
};
use crate::rules;

macro_rules! reference_entity {
    ($(#[$meta:meta])* $name:ident, $id:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub id: $id,
            pub name: String,
            pub created_at: DateTime<Utc>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub updated_at: Option<DateTime<Utc>>,
        }

        impl $name {
            pub fn new(id: impl Into<$id>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
                Self {
                    id: id.into(),
                    name: name.into(),
                    created_at,
                    updated_at: None,
                }
            }
        }

        impl Identified for $name {
            fn key(&self) -> &str {
                self.id.as_str()
            }
        }

        impl Named for $name {
            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

reference_entity!(Gender, GenderId);
reference_entity!(BloodGroup, BloodGroupId);
reference_entity!(ResidentialStatus, ResidentialStatusId);
reference_entity!(Religion, ReligionId);
reference_entity!(Designation, DesignationId);
reference_entity!(Relation, RelationId);
reference_entity!(MaritalStatus, MaritalStatusId);
reference_entity!(
    /// Free-text job rule shown to staff. Names may be long Bengali sentences.
    JobRule,
    JobRuleId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateReferenceDto {
    #[validate(custom(function = "rules::reference_name"))]
    pub name: String,
}

impl CreateReferenceDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateReferenceDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::reference_name"))]
    pub name: Option<String>,
}

/// Reference lists only filter by a case-insensitive name search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceFilterParams {
    #[serde(default, deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ReferenceFilterParams {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }
}

/// Every reference collection at once, for populating form dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleEntities {
    pub genders: Vec<Gender>,
    pub blood_groups: Vec<BloodGroup>,
    pub residential_statuses: Vec<ResidentialStatus>,
    pub religions: Vec<Religion>,
    pub relations: Vec<Relation>,
    pub marital_statuses: Vec<MaritalStatus>,
    pub job_rules: Vec<JobRule>,
    pub designations: Vec<Designation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reference_dto_validation() {
        assert!(CreateReferenceDto::new("Male").validate().is_ok());
        assert!(CreateReferenceDto::new("").validate().is_err());
        assert!(CreateReferenceDto::new("x".repeat(51)).validate().is_err());
    }

    #[test]
    fn test_update_reference_dto_validation() {
        assert!(UpdateReferenceDto::default().validate().is_ok());
        let blank = UpdateReferenceDto {
            name: Some(String::new()),
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_reference_entity_wire_shape() {
        let gender = Gender::new("g1", "Male", Utc::now());
        let json = serde_json::to_value(&gender).unwrap();
        assert_eq!(json["id"], "g1");
        assert_eq!(json["name"], "Male");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_named_projection() {
        let religion = Religion::new("r2", "Christianity", Utc::now());
        assert_eq!(religion.key(), "r2");
        assert_eq!(religion.name(), "Christianity");
    }

    #[test]
    fn test_filter_blank_search_is_none() {
        let filters: ReferenceFilterParams = serde_json::from_str(r#"{"search": ""}"#).unwrap();
        assert_eq!(filters, ReferenceFilterParams::default());
    }
}
