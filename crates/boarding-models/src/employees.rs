//! Staff and teacher domain models and DTOs.
//!
//! Staff members and teachers share one employee profile: personal details,
//! demographic foreign keys, two addresses, nested qualification / experience /
//! reference lists, employment terms, skills and a status. The two entity types
//! differ only in their id.
//!
//! Nested list items carry their own ids (`eq*`, `pe*`, `ref*`). The DTO input
//! types take an optional id: on update, items that keep their id keep their
//! identity, items without one are new.
//!
//! # Example
//!
//! ```ignore
//! use boarding_models::employees::{CreateEmployeeDto, ExperienceInput};
//!
//! let dto: CreateEmployeeDto = serde_json::from_value(form_json)?;
//! // Field rules plus the end-date-after-start-date check.
//! dto.validate_all()?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use boarding_core::search::search_matches;
use boarding_core::serde::empty_string_as_none;
use boarding_core::validation::{
    FieldErrors, validate_contact_number, validate_mobile_number, validate_optional_email,
    validate_optional_url, validate_payload, validate_required_id, validate_year,
};

use crate::address::{Address, sync_same_as_present};
use crate::common::{Identified, NamedRef, Status};
use crate::ids::{
    BloodGroupId, DesignationId, ExperienceId, GenderId, GradeLevelId, LanguageProficiencyId,
    MaritalStatusId, NationalityId, QualificationId, ReferenceId, ReligionId, StaffId, SubjectId,
    TeacherId,
};
use crate::rules;

pub const END_DATE_MESSAGE: &str = "End date must be after start date";

// ============================================================================
// Nested records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalQualification {
    pub id: QualificationId,
    pub degree_name: String,
    pub institution: String,
    pub year: String,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalExperience {
    pub id: ExperienceId,
    pub company_name: String,
    pub job_title: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub responsibilities: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
}

/// A professional contact vouching for the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalReference {
    pub id: ReferenceId,
    pub name: String,
    pub relationship: String,
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_letter_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OnlineProfiles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_url"))]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_url"))]
    pub personal_website: Option<String>,
}

// ============================================================================
// Profile and entities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    // Personal
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    pub father_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    pub mobile_number: String,
    pub email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nid_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_reg_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    // Demographics
    pub gender_id: GenderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group_id: Option<BloodGroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion_id: Option<ReligionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_condition: Option<String>,
    pub nationality_id: NationalityId,
    pub marital_status_id: MaritalStatusId,

    // Addresses
    #[serde(default)]
    pub present_address: Address,
    #[serde(default)]
    pub permanent_address: Address,
    #[serde(default)]
    pub same_as_present: bool,

    // History
    #[serde(default)]
    pub educational_qualifications: Vec<EducationalQualification>,
    #[serde(default)]
    pub professional_experience: Vec<ProfessionalExperience>,
    #[serde(default)]
    pub references: Vec<ProfessionalReference>,

    // Employment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_signature_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<String>,
    pub designation_ids: Vec<DesignationId>,
    #[serde(default)]
    pub subject_ids: Vec<SubjectId>,
    #[serde(default)]
    pub grade_level_ids: Vec<GradeLevelId>,
    #[serde(default)]
    pub language_proficiency_ids: Vec<LanguageProficiencyId>,

    // Skills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_methodology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_profiles: Option<OnlineProfiles>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub status: Status,
}

impl EmployeeProfile {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Access to the shared profile of staff and teacher records.
pub trait HasProfile {
    fn profile(&self) -> &EmployeeProfile;
}

macro_rules! employee_entity {
    ($(#[$meta:meta])* $name:ident, $id:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub id: $id,
            #[serde(flatten)]
            pub profile: EmployeeProfile,
            pub created_at: DateTime<Utc>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub updated_at: Option<DateTime<Utc>>,
        }

        impl Identified for $name {
            fn key(&self) -> &str {
                self.id.as_str()
            }
        }

        impl HasProfile for $name {
            fn profile(&self) -> &EmployeeProfile {
                &self.profile
            }
        }
    };
}

employee_entity!(
    /// Non-teaching staff member (librarian, accountant, hostel manager, ...).
    Staff,
    StaffId
);
employee_entity!(Teacher, TeacherId);

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QualificationInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QualificationId>,
    #[validate(custom(function = "rules::degree_name"))]
    pub degree_name: String,
    #[validate(custom(function = "rules::institution"))]
    pub institution: String,
    #[validate(custom(function = "validate_year"))]
    pub year: String,
    #[validate(custom(function = "rules::grade"))]
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

impl QualificationInput {
    pub fn into_record(self, id: QualificationId) -> EducationalQualification {
        EducationalQualification {
            id,
            degree_name: self.degree_name,
            institution: self.institution,
            year: self.year,
            grade: self.grade,
            document_url: self.document_url,
        }
    }
}

impl From<&EducationalQualification> for QualificationInput {
    fn from(record: &EducationalQualification) -> Self {
        Self {
            id: Some(record.id.clone()),
            degree_name: record.degree_name.clone(),
            institution: record.institution.clone(),
            year: record.year.clone(),
            grade: record.grade.clone(),
            document_url: record.document_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExperienceId>,
    #[validate(custom(function = "rules::company_name"))]
    pub company_name: String,
    #[validate(custom(function = "rules::job_title"))]
    pub job_title: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[validate(custom(function = "rules::responsibilities"))]
    pub responsibilities: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::achievements"))]
    pub achievements: Option<String>,
}

impl ExperienceInput {
    /// An end date, when present, must fall strictly after the start date.
    #[must_use]
    pub fn has_valid_date_order(&self) -> bool {
        self.end_date.is_none_or(|end| end > self.start_date)
    }

    pub fn into_record(self, id: ExperienceId) -> ProfessionalExperience {
        ProfessionalExperience {
            id,
            company_name: self.company_name,
            job_title: self.job_title,
            start_date: self.start_date,
            end_date: self.end_date,
            responsibilities: self.responsibilities,
            achievements: self.achievements,
        }
    }
}

impl From<&ProfessionalExperience> for ExperienceInput {
    fn from(record: &ProfessionalExperience) -> Self {
        Self {
            id: Some(record.id.clone()),
            company_name: record.company_name.clone(),
            job_title: record.job_title.clone(),
            start_date: record.start_date,
            end_date: record.end_date,
            responsibilities: record.responsibilities.clone(),
            achievements: record.achievements.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReferenceId>,
    #[validate(custom(function = "rules::reference_contact_name"))]
    pub name: String,
    #[validate(custom(function = "rules::relationship"))]
    pub relationship: String,
    #[validate(custom(function = "validate_contact_number"))]
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_letter_url: Option<String>,
}

impl ReferenceInput {
    pub fn into_record(self, id: ReferenceId) -> ProfessionalReference {
        ProfessionalReference {
            id,
            name: self.name,
            relationship: self.relationship,
            contact_number: self.contact_number,
            email: self.email,
            recommendation_letter_url: self.recommendation_letter_url,
        }
    }
}

impl From<&ProfessionalReference> for ReferenceInput {
    fn from(record: &ProfessionalReference) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            relationship: record.relationship.clone(),
            contact_number: record.contact_number.clone(),
            email: record.email.clone(),
            recommendation_letter_url: record.recommendation_letter_url.clone(),
        }
    }
}

/// Cross-field pass over experience items: end date after start date.
fn experience_date_errors(items: &[ExperienceInput]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (index, item) in items.iter().enumerate() {
        if !item.has_valid_date_order() {
            errors.insert(
                format!("professionalExperience[{index}].endDate"),
                END_DATE_MESSAGE,
            );
        }
    }
    errors
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeDto {
    #[validate(custom(function = "rules::first_name"))]
    pub first_name: String,
    #[validate(custom(function = "rules::last_name"))]
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::place_of_birth"))]
    pub place_of_birth: Option<String>,
    #[validate(custom(function = "rules::father_name"))]
    pub father_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::optional_mother_name"))]
    pub mother_name: Option<String>,
    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile_number: String,
    #[validate(email(message = "Invalid email format"))]
    pub email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::nid_number"))]
    pub nid_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::birth_reg_number"))]
    pub birth_reg_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[validate(custom(function = "validate_required_id"))]
    pub gender_id: GenderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group_id: Option<BloodGroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion_id: Option<ReligionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::employee_health_condition"))]
    pub health_condition: Option<String>,
    #[validate(custom(function = "validate_required_id"))]
    pub nationality_id: NationalityId,
    #[validate(custom(function = "validate_required_id"))]
    pub marital_status_id: MaritalStatusId,

    #[serde(default)]
    pub present_address: Address,
    #[serde(default)]
    pub permanent_address: Address,
    #[serde(default)]
    pub same_as_present: bool,

    #[serde(default)]
    #[validate(nested)]
    pub educational_qualifications: Vec<QualificationInput>,
    #[serde(default)]
    #[validate(nested)]
    pub professional_experience: Vec<ExperienceInput>,
    #[serde(default)]
    #[validate(nested)]
    pub references: Vec<ReferenceInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Salary expectation must be positive"))]
    pub salary_expectation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_signature_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 50, message = "Years of experience must be less than 50"))]
    pub years_of_experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::notice_period"))]
    pub notice_period: Option<String>,
    #[validate(length(min = 1, message = "At least one designation is required"))]
    pub designation_ids: Vec<DesignationId>,
    #[serde(default)]
    pub subject_ids: Vec<SubjectId>,
    #[serde(default)]
    pub grade_level_ids: Vec<GradeLevelId>,
    #[serde(default)]
    pub language_proficiency_ids: Vec<LanguageProficiencyId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::computer_skills"))]
    pub computer_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::teaching_methodology"))]
    pub teaching_methodology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub online_profiles: Option<OnlineProfiles>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::details"))]
    pub details: Option<String>,
    #[serde(default)]
    pub status: Status,
}

impl CreateEmployeeDto {
    /// Derived field rules plus the experience date-order check, merged into
    /// one field-path map.
    pub fn validate_all(&self) -> Result<(), FieldErrors> {
        let mut errors = validate_payload(self).err().unwrap_or_default();
        errors.merge(experience_date_errors(&self.professional_experience));
        errors.into_result()
    }

    pub fn apply_same_as_present(&mut self) {
        sync_same_as_present(
            self.same_as_present,
            &self.present_address,
            &mut self.permanent_address,
        );
    }
}

/// Form value for editing an existing staff member or teacher.
impl From<&EmployeeProfile> for CreateEmployeeDto {
    fn from(p: &EmployeeProfile) -> Self {
        Self {
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            date_of_birth: p.date_of_birth,
            place_of_birth: p.place_of_birth.clone(),
            father_name: p.father_name.clone(),
            mother_name: p.mother_name.clone(),
            mobile_number: p.mobile_number.clone(),
            email_address: p.email_address.clone(),
            emergency_contact: p.emergency_contact.clone(),
            nid_number: p.nid_number.clone(),
            birth_reg_number: p.birth_reg_number.clone(),
            photo_url: p.photo_url.clone(),
            gender_id: p.gender_id.clone(),
            blood_group_id: p.blood_group_id.clone(),
            religion_id: p.religion_id.clone(),
            health_condition: p.health_condition.clone(),
            nationality_id: p.nationality_id.clone(),
            marital_status_id: p.marital_status_id.clone(),
            present_address: p.present_address.clone(),
            permanent_address: p.permanent_address.clone(),
            same_as_present: p.same_as_present,
            educational_qualifications: p.educational_qualifications.iter().map(Into::into).collect(),
            professional_experience: p.professional_experience.iter().map(Into::into).collect(),
            references: p.references.iter().map(Into::into).collect(),
            salary_expectation: p.salary_expectation,
            joining_date: p.joining_date,
            digital_signature_url: p.digital_signature_url.clone(),
            years_of_experience: p.years_of_experience,
            notice_period: p.notice_period.clone(),
            designation_ids: p.designation_ids.clone(),
            subject_ids: p.subject_ids.clone(),
            grade_level_ids: p.grade_level_ids.clone(),
            language_proficiency_ids: p.language_proficiency_ids.clone(),
            computer_skills: p.computer_skills.clone(),
            teaching_methodology: p.teaching_methodology.clone(),
            online_profiles: p.online_profiles.clone(),
            details: p.details.clone(),
            status: p.status,
        }
    }
}

/// Partial update. Supplied nested lists replace the stored ones wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::first_name"))]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::last_name"))]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::place_of_birth"))]
    pub place_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::father_name"))]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::optional_mother_name"))]
    pub mother_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::nid_number"))]
    pub nid_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::birth_reg_number"))]
    pub birth_reg_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_required_id"))]
    pub gender_id: Option<GenderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group_id: Option<BloodGroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion_id: Option<ReligionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::employee_health_condition"))]
    pub health_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_required_id"))]
    pub nationality_id: Option<NationalityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_required_id"))]
    pub marital_status_id: Option<MaritalStatusId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_as_present: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub educational_qualifications: Option<Vec<QualificationInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub professional_experience: Option<Vec<ExperienceInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub references: Option<Vec<ReferenceInput>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Salary expectation must be positive"))]
    pub salary_expectation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_signature_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 50, message = "Years of experience must be less than 50"))]
    pub years_of_experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::notice_period"))]
    pub notice_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "At least one designation is required"))]
    pub designation_ids: Option<Vec<DesignationId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_ids: Option<Vec<SubjectId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level_ids: Option<Vec<GradeLevelId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_proficiency_ids: Option<Vec<LanguageProficiencyId>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::computer_skills"))]
    pub computer_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::teaching_methodology"))]
    pub teaching_methodology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub online_profiles: Option<OnlineProfiles>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::details"))]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl UpdateEmployeeDto {
    /// Same rules as create, applied to the supplied fields only.
    pub fn validate_all(&self) -> Result<(), FieldErrors> {
        let mut errors = validate_payload(self).err().unwrap_or_default();
        if let Some(items) = &self.professional_experience {
            errors.merge(experience_date_errors(items));
        }
        errors.into_result()
    }
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilterParams {
    /// Matches first name, last name, email address or mobile number.
    #[serde(default, deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_id: Option<GenderId>,
    /// Employee teaches this subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<SubjectId>,
    /// Employee is assigned to this grade level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level_id: Option<GradeLevelId>,
    /// Employee holds any of these designations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub designation_ids: Vec<DesignationId>,
}

impl EmployeeFilterParams {
    #[must_use]
    pub fn matches(&self, p: &EmployeeProfile) -> bool {
        let searched = search_matches(
            self.search.as_deref(),
            [
                Some(p.first_name.as_str()),
                Some(p.last_name.as_str()),
                Some(p.email_address.as_str()),
                Some(p.mobile_number.as_str()),
            ],
        );

        searched
            && self.status.is_none_or(|status| p.status == status)
            && self.gender_id.as_ref().is_none_or(|id| p.gender_id == *id)
            && self.subject_id.as_ref().is_none_or(|id| p.subject_ids.contains(id))
            && self
                .grade_level_id
                .as_ref()
                .is_none_or(|id| p.grade_level_ids.contains(id))
            && (self.designation_ids.is_empty()
                || self
                    .designation_ids
                    .iter()
                    .any(|id| p.designation_ids.contains(id)))
    }
}

// ============================================================================
// Detail views
// ============================================================================

/// Employee record with its foreign keys resolved to `{id, name}` pairs.
/// Unresolvable ids are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail<T> {
    #[serde(flatten)]
    pub record: T,
    pub designations: Vec<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<NamedRef>,
}

pub type StaffDetail = EmployeeDetail<Staff>;
pub type TeacherDetail = EmployeeDetail<Teacher>;

impl<T: Identified> Identified for EmployeeDetail<T> {
    fn key(&self) -> &str {
        self.record.key()
    }
}
