//! Student domain models and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use boarding_core::search::search_matches;
use boarding_core::serde::empty_string_as_none;
use boarding_core::validation::{validate_optional_email, validate_required_id};

use crate::address::{Address, sync_same_as_present};
use crate::common::{Identified, NamedRef, Status};
use crate::ids::{BloodGroupId, GenderId, NationalityId, ReligionId, StudentId};
use crate::rules;

/// An uploaded document: a URL or base64 data URI plus the original filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl FileRef {
    pub fn new(url: impl Into<String>, file_name: Option<&str>) -> Self {
        Self {
            url: url.into(),
            file_name: file_name.map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nid_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brn_number: Option<String>,
    pub gender_id: GenderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group_id: Option<BloodGroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion_id: Option<ReligionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_id: Option<NationalityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<Address>,
    #[serde(default)]
    pub same_as_present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_photo: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_brn: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_signature: Option<FileRef>,
    #[serde(default)]
    pub status: Status,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identified for Student {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(custom(function = "rules::first_name"))]
    pub first_name: String,
    #[validate(custom(function = "rules::last_name"))]
    pub last_name: String,
    #[validate(custom(function = "rules::father_name"))]
    pub father_name: String,
    #[validate(custom(function = "rules::mother_name"))]
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::student_health_condition"))]
    pub health_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::nid_number"))]
    pub nid_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::brn_number"))]
    pub brn_number: Option<String>,
    #[validate(custom(function = "validate_required_id"))]
    pub gender_id: GenderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group_id: Option<BloodGroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion_id: Option<ReligionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_id: Option<NationalityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<Address>,
    #[serde(default)]
    pub same_as_present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_photo: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_brn: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_signature: Option<FileRef>,
    #[serde(default)]
    pub status: Status,
}

impl CreateStudentDto {
    pub fn apply_same_as_present(&mut self) {
        sync_same_as_present(
            self.same_as_present,
            &self.present_address,
            &mut self.permanent_address,
        );
    }
}

/// Form value for editing an existing student.
impl From<&Student> for CreateStudentDto {
    fn from(s: &Student) -> Self {
        Self {
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
            father_name: s.father_name.clone(),
            mother_name: s.mother_name.clone(),
            date_of_birth: s.date_of_birth,
            email: s.email.clone(),
            health_condition: s.health_condition.clone(),
            nid_number: s.nid_number.clone(),
            brn_number: s.brn_number.clone(),
            gender_id: s.gender_id.clone(),
            blood_group_id: s.blood_group_id.clone(),
            religion_id: s.religion_id.clone(),
            nationality_id: s.nationality_id.clone(),
            present_address: s.present_address.clone(),
            permanent_address: s.permanent_address.clone(),
            same_as_present: s.same_as_present,
            student_photo: s.student_photo.clone(),
            student_nid: s.student_nid.clone(),
            student_brn: s.student_brn.clone(),
            father_nid: s.father_nid.clone(),
            mother_nid: s.mother_nid.clone(),
            digital_signature: s.digital_signature.clone(),
            status: s.status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::first_name"))]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::last_name"))]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::father_name"))]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::mother_name"))]
    pub mother_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::student_health_condition"))]
    pub health_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::nid_number"))]
    pub nid_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::brn_number"))]
    pub brn_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_required_id"))]
    pub gender_id: Option<GenderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group_id: Option<BloodGroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion_id: Option<ReligionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_id: Option<NationalityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_as_present: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_photo: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_brn: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_nid: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_signature: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFilterParams {
    /// Matches names, parents' names, email, NID or BRN number.
    #[serde(default, deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_id: Option<GenderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group_id: Option<BloodGroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion_id: Option<ReligionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_id: Option<NationalityId>,
}

impl StudentFilterParams {
    #[must_use]
    pub fn matches(&self, s: &Student) -> bool {
        let searched = search_matches(
            self.search.as_deref(),
            [
                Some(s.first_name.as_str()),
                Some(s.last_name.as_str()),
                Some(s.father_name.as_str()),
                Some(s.mother_name.as_str()),
                s.email.as_deref(),
                s.nid_number.as_deref(),
                s.brn_number.as_deref(),
            ],
        );

        searched
            && self.status.is_none_or(|status| s.status == status)
            && self.gender_id.as_ref().is_none_or(|id| s.gender_id == *id)
            && self
                .blood_group_id
                .as_ref()
                .is_none_or(|id| s.blood_group_id.as_ref() == Some(id))
            && self
                .religion_id
                .as_ref()
                .is_none_or(|id| s.religion_id.as_ref() == Some(id))
            && self
                .nationality_id
                .as_ref()
                .is_none_or(|id| s.nationality_id.as_ref() == Some(id))
    }
}

/// Lightweight projection for student pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOption {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Student> for StudentOption {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.clone(),
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<NamedRef>,
}

impl Identified for StudentDetail {
    fn key(&self) -> &str {
        self.student.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maria() -> Student {
        serde_json::from_value(serde_json::json!({
            "id": "st6",
            "firstName": "Maria",
            "lastName": "Gomes",
            "fatherName": "Peter Gomes",
            "motherName": "Anna Gomes",
            "dateOfBirth": "2012-03-14",
            "email": "maria.gomes@example.com",
            "brnNumber": "20121234567",
            "genderId": "g2",
            "bloodGroupId": "bg2",
            "religionId": "r2",
            "studentPhoto": {"url": "https://cdn.example.com/maria.jpg", "fileName": "maria.jpg"},
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_student_deserializes_with_defaults() {
        let student = maria();
        assert_eq!(student.status, Status::Active);
        assert!(!student.same_as_present);
        assert_eq!(
            student.student_photo.as_ref().and_then(|f| f.file_name.as_deref()),
            Some("maria.jpg")
        );
    }

    #[test]
    fn test_create_dto_validation() {
        let mut dto = CreateStudentDto::from(&maria());
        assert!(dto.validate().is_ok());

        dto.email = Some(String::new());
        assert!(dto.validate().is_ok());

        dto.mother_name = String::new();
        dto.nid_number = Some("1".repeat(21));
        let errors = boarding_core::validate_payload(&dto).unwrap_err();
        assert_eq!(errors.get("motherName"), Some("Mother name is required"));
        assert_eq!(
            errors.get("nidNumber"),
            Some("NID number must be less than 20 characters")
        );
    }

    #[test]
    fn test_filter_matches_parent_names_and_brn() {
        let student = maria();
        let by_parent = StudentFilterParams {
            search: Some("peter".into()),
            ..Default::default()
        };
        let by_brn = StudentFilterParams {
            search: Some("2012123".into()),
            ..Default::default()
        };
        assert!(by_parent.matches(&student));
        assert!(by_brn.matches(&student));
    }

    #[test]
    fn test_filter_exact_foreign_keys() {
        let student = maria();
        let hit = StudentFilterParams {
            gender_id: Some("g2".into()),
            religion_id: Some("r2".into()),
            ..Default::default()
        };
        let miss = StudentFilterParams {
            nationality_id: Some("n1".into()),
            ..Default::default()
        };
        assert!(hit.matches(&student));
        assert!(!miss.matches(&student));
    }

    #[test]
    fn test_dropdown_projection() {
        let option = StudentOption::from(&maria());
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json, serde_json::json!({"id": "st6", "firstName": "Maria", "lastName": "Gomes"}));
    }
}
