//! Repository bindings for staff and teachers.
//!
//! Both entity types wrap the same [`EmployeeProfile`], so building, merging
//! and filtering are written once against the profile. Nested qualification,
//! experience and reference items draw their ids from the owning store's
//! sequence: create always assigns fresh ids, update keeps the ids items
//! arrive with and assigns fresh ones to the rest.

use boarding_core::FieldErrors;
use boarding_models::ids::{ExperienceId, QualificationId, ReferenceId, StaffId, TeacherId};
use boarding_models::{
    CreateEmployeeDto, EducationalQualification, EmployeeFilterParams, EmployeeProfile,
    ExperienceInput, ProfessionalExperience, ProfessionalReference, QualificationInput,
    ReferenceInput, Staff, Teacher, UpdateEmployeeDto,
};
use chrono::{DateTime, Utc};

use crate::entity::{Entity, merge_fields};
use crate::store::IdSequence;

pub const QUALIFICATION_PREFIX: &str = "eq";
pub const EXPERIENCE_PREFIX: &str = "pe";
pub const REFERENCE_PREFIX: &str = "ref";

/// A nested list item as submitted, before it has a stored id.
trait NestedInput {
    type Id: From<String>;
    type Record;

    const PREFIX: &'static str;

    fn take_id(&mut self) -> Option<Self::Id>;

    fn into_stored(self, id: Self::Id) -> Self::Record;
}

impl NestedInput for QualificationInput {
    type Id = QualificationId;
    type Record = EducationalQualification;

    const PREFIX: &'static str = QUALIFICATION_PREFIX;

    fn take_id(&mut self) -> Option<QualificationId> {
        self.id.take()
    }

    fn into_stored(self, id: QualificationId) -> EducationalQualification {
        self.into_record(id)
    }
}

impl NestedInput for ExperienceInput {
    type Id = ExperienceId;
    type Record = ProfessionalExperience;

    const PREFIX: &'static str = EXPERIENCE_PREFIX;

    fn take_id(&mut self) -> Option<ExperienceId> {
        self.id.take()
    }

    fn into_stored(self, id: ExperienceId) -> ProfessionalExperience {
        self.into_record(id)
    }
}

impl NestedInput for ReferenceInput {
    type Id = ReferenceId;
    type Record = ProfessionalReference;

    const PREFIX: &'static str = REFERENCE_PREFIX;

    fn take_id(&mut self) -> Option<ReferenceId> {
        self.id.take()
    }

    fn into_stored(self, id: ReferenceId) -> ProfessionalReference {
        self.into_record(id)
    }
}

/// Every item gets a fresh id, whatever it was submitted with.
fn assign_fresh<I: NestedInput>(items: Vec<I>, ids: &mut IdSequence) -> Vec<I::Record> {
    items
        .into_iter()
        .map(|mut item| {
            item.take_id();
            let id = ids.next_id(I::PREFIX);
            item.into_stored(id)
        })
        .collect()
}

/// Items keep a submitted id; the rest get a fresh one.
fn assign_kept<I: NestedInput>(items: Vec<I>, ids: &mut IdSequence) -> Vec<I::Record> {
    items
        .into_iter()
        .map(|mut item| {
            let id = ids.keep_or_next(item.take_id(), I::PREFIX);
            item.into_stored(id)
        })
        .collect()
}

pub(crate) fn build_profile(dto: CreateEmployeeDto, ids: &mut IdSequence) -> EmployeeProfile {
    EmployeeProfile {
        first_name: dto.first_name,
        last_name: dto.last_name,
        date_of_birth: dto.date_of_birth,
        place_of_birth: dto.place_of_birth,
        father_name: dto.father_name,
        mother_name: dto.mother_name,
        mobile_number: dto.mobile_number,
        email_address: dto.email_address,
        emergency_contact: dto.emergency_contact,
        nid_number: dto.nid_number,
        birth_reg_number: dto.birth_reg_number,
        photo_url: dto.photo_url,
        gender_id: dto.gender_id,
        blood_group_id: dto.blood_group_id,
        religion_id: dto.religion_id,
        health_condition: dto.health_condition,
        nationality_id: dto.nationality_id,
        marital_status_id: dto.marital_status_id,
        present_address: dto.present_address,
        permanent_address: dto.permanent_address,
        same_as_present: dto.same_as_present,
        educational_qualifications: assign_fresh(dto.educational_qualifications, ids),
        professional_experience: assign_fresh(dto.professional_experience, ids),
        references: assign_fresh(dto.references, ids),
        salary_expectation: dto.salary_expectation,
        joining_date: dto.joining_date,
        digital_signature_url: dto.digital_signature_url,
        years_of_experience: dto.years_of_experience,
        notice_period: dto.notice_period,
        designation_ids: dto.designation_ids,
        subject_ids: dto.subject_ids,
        grade_level_ids: dto.grade_level_ids,
        language_proficiency_ids: dto.language_proficiency_ids,
        computer_skills: dto.computer_skills,
        teaching_methodology: dto.teaching_methodology,
        online_profiles: dto.online_profiles,
        details: dto.details,
        status: dto.status,
    }
}

/// Supplied nested lists replace the stored ones wholesale.
pub(crate) fn merge_profile(
    profile: &mut EmployeeProfile,
    mut dto: UpdateEmployeeDto,
    ids: &mut IdSequence,
) {
    if let Some(items) = dto.educational_qualifications.take() {
        profile.educational_qualifications = assign_kept(items, ids);
    }
    if let Some(items) = dto.professional_experience.take() {
        profile.professional_experience = assign_kept(items, ids);
    }
    if let Some(items) = dto.references.take() {
        profile.references = assign_kept(items, ids);
    }

    merge_fields!(profile, dto;
        set: [
            first_name, last_name, date_of_birth, father_name, mobile_number, email_address,
            gender_id, nationality_id, marital_status_id, present_address, permanent_address,
            same_as_present, designation_ids, subject_ids, grade_level_ids,
            language_proficiency_ids, status,
        ],
        wrap: [
            place_of_birth, mother_name, emergency_contact, nid_number, birth_reg_number,
            photo_url, blood_group_id, religion_id, health_condition, salary_expectation,
            joining_date, digital_signature_url, years_of_experience, notice_period,
            computer_skills, teaching_methodology, online_profiles, details,
        ],
    );
}

macro_rules! impl_employee_entity {
    ($ty:ty, $id:ty, $name:literal, $prefix:literal) => {
        impl Entity for $ty {
            type Id = $id;
            type Create = CreateEmployeeDto;
            type Update = UpdateEmployeeDto;
            type Filter = EmployeeFilterParams;

            const NAME: &'static str = $name;
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &Self::Id {
                &self.id
            }

            fn validate_create(dto: &CreateEmployeeDto) -> Result<(), FieldErrors> {
                dto.validate_all()
            }

            fn validate_update(dto: &UpdateEmployeeDto) -> Result<(), FieldErrors> {
                dto.validate_all()
            }

            fn build(
                id: Self::Id,
                dto: CreateEmployeeDto,
                created_at: DateTime<Utc>,
                ids: &mut IdSequence,
            ) -> Self {
                Self {
                    id,
                    profile: build_profile(dto, ids),
                    created_at,
                    updated_at: None,
                }
            }

            fn merge(&mut self, dto: UpdateEmployeeDto, ids: &mut IdSequence) {
                merge_profile(&mut self.profile, dto, ids);
            }

            fn touch(&mut self, at: DateTime<Utc>) {
                self.updated_at = Some(at);
            }

            fn matches(&self, filter: &EmployeeFilterParams) -> bool {
                filter.matches(&self.profile)
            }
        }
    };
}

impl_employee_entity!(Staff, StaffId, "Staff", "st");
impl_employee_entity!(Teacher, TeacherId, "Teacher", "t");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn qualification(id: Option<&str>) -> QualificationInput {
        QualificationInput {
            id: id.map(Into::into),
            degree_name: "B.Ed".into(),
            institution: "University of Dhaka".into(),
            year: "2015".into(),
            grade: "A".into(),
            document_url: None,
        }
    }

    fn experience(id: Option<&str>) -> ExperienceInput {
        ExperienceInput {
            id: id.map(Into::into),
            company_name: "Dhaka Model School".into(),
            job_title: "Assistant Teacher".into(),
            start_date: date(2016, 1, 1),
            end_date: Some(date(2019, 12, 31)),
            responsibilities: "Mathematics for grades 6 to 8".into(),
            achievements: None,
        }
    }

    #[test]
    fn test_assign_fresh_ignores_submitted_ids() {
        let mut ids = IdSequence::default();
        let records = assign_fresh(vec![qualification(Some("eq1")), qualification(None)], &mut ids);
        let assigned: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(assigned, vec!["eq100", "eq101"]);
    }

    #[test]
    fn test_assign_kept_preserves_existing_ids() {
        let mut ids = IdSequence::default();
        let records = assign_kept(vec![experience(Some("pe7")), experience(None)], &mut ids);
        let assigned: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(assigned, vec!["pe7", "pe100"]);
    }

    #[test]
    fn test_nested_ids_share_one_sequence() {
        let mut ids = IdSequence::default();
        let qualifications = assign_fresh(vec![qualification(None)], &mut ids);
        let experience = assign_fresh(vec![experience(None)], &mut ids);
        assert_eq!(qualifications[0].id.as_str(), "eq100");
        assert_eq!(experience[0].id.as_str(), "pe101");
    }
}
