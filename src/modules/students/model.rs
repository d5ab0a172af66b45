use boarding_models::ids::StudentId;
use boarding_models::{CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto};
use chrono::{DateTime, Utc};

use crate::entity::{Entity, merge_fields};
use crate::store::IdSequence;

impl Entity for Student {
    type Id = StudentId;
    type Create = CreateStudentDto;
    type Update = UpdateStudentDto;
    type Filter = StudentFilterParams;

    const NAME: &'static str = "Student";
    const ID_PREFIX: &'static str = "s";

    fn id(&self) -> &StudentId {
        &self.id
    }

    fn build(
        id: StudentId,
        dto: CreateStudentDto,
        created_at: DateTime<Utc>,
        _ids: &mut IdSequence,
    ) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            father_name: dto.father_name,
            mother_name: dto.mother_name,
            date_of_birth: dto.date_of_birth,
            email: dto.email,
            health_condition: dto.health_condition,
            nid_number: dto.nid_number,
            brn_number: dto.brn_number,
            gender_id: dto.gender_id,
            blood_group_id: dto.blood_group_id,
            religion_id: dto.religion_id,
            nationality_id: dto.nationality_id,
            present_address: dto.present_address,
            permanent_address: dto.permanent_address,
            same_as_present: dto.same_as_present,
            student_photo: dto.student_photo,
            student_nid: dto.student_nid,
            student_brn: dto.student_brn,
            father_nid: dto.father_nid,
            mother_nid: dto.mother_nid,
            digital_signature: dto.digital_signature,
            status: dto.status,
            created_at,
            updated_at: None,
        }
    }

    fn merge(&mut self, dto: UpdateStudentDto, _ids: &mut IdSequence) {
        merge_fields!(self, dto;
            set: [
                first_name, last_name, father_name, mother_name, date_of_birth, gender_id,
                same_as_present, status,
            ],
            wrap: [
                email, health_condition, nid_number, brn_number, blood_group_id, religion_id,
                nationality_id, present_address, permanent_address, student_photo, student_nid,
                student_brn, father_nid, mother_nid, digital_signature,
            ],
        );
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    fn matches(&self, filter: &StudentFilterParams) -> bool {
        filter.matches(self)
    }
}
