//! Repository bindings for reference entities and guardians.

use boarding_core::search::search_matches;
use boarding_models::ids::{
    BloodGroupId, DesignationId, GenderId, GuardianId, JobRuleId, MaritalStatusId, RelationId,
    ReligionId, ResidentialStatusId,
};
use boarding_models::{
    BloodGroup, CreateGuardianDto, CreateReferenceDto, Designation, Gender, Guardian,
    GuardianFilterParams, JobRule, MaritalStatus, ReferenceFilterParams, Relation, Religion,
    ResidentialStatus, UpdateGuardianDto, UpdateReferenceDto,
};
use chrono::{DateTime, Utc};

use crate::entity::{Entity, merge_fields};
use crate::store::IdSequence;

macro_rules! impl_reference_entity {
    ($ty:ty, $id:ty, $name:literal, $prefix:literal) => {
        impl Entity for $ty {
            type Id = $id;
            type Create = CreateReferenceDto;
            type Update = UpdateReferenceDto;
            type Filter = ReferenceFilterParams;

            const NAME: &'static str = $name;
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &Self::Id {
                &self.id
            }

            fn build(
                id: Self::Id,
                dto: CreateReferenceDto,
                created_at: DateTime<Utc>,
                _ids: &mut IdSequence,
            ) -> Self {
                Self::new(id, dto.name, created_at)
            }

            fn merge(&mut self, dto: UpdateReferenceDto, _ids: &mut IdSequence) {
                merge_fields!(self, dto; set: [name], wrap: []);
            }

            fn touch(&mut self, at: DateTime<Utc>) {
                self.updated_at = Some(at);
            }

            fn matches(&self, filter: &ReferenceFilterParams) -> bool {
                search_matches(filter.search.as_deref(), [Some(self.name.as_str())])
            }
        }
    };
}

impl_reference_entity!(Gender, GenderId, "Gender", "g");
impl_reference_entity!(BloodGroup, BloodGroupId, "Blood Group", "bg");
impl_reference_entity!(ResidentialStatus, ResidentialStatusId, "Residential Status", "rs");
impl_reference_entity!(Religion, ReligionId, "Religion", "r");
impl_reference_entity!(Designation, DesignationId, "Designation", "d");
impl_reference_entity!(Relation, RelationId, "Relation", "rel");
impl_reference_entity!(MaritalStatus, MaritalStatusId, "Marital Status", "ms");
impl_reference_entity!(JobRule, JobRuleId, "Job Rule", "jr");

impl Entity for Guardian {
    type Id = GuardianId;
    type Create = CreateGuardianDto;
    type Update = UpdateGuardianDto;
    type Filter = GuardianFilterParams;

    const NAME: &'static str = "Guardian";
    const ID_PREFIX: &'static str = "gd";

    fn id(&self) -> &GuardianId {
        &self.id
    }

    /// Stores the addresses exactly as submitted; mirroring is the form's job.
    fn build(
        id: GuardianId,
        dto: CreateGuardianDto,
        created_at: DateTime<Utc>,
        _ids: &mut IdSequence,
    ) -> Self {
        Self {
            id,
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            occupation: dto.occupation,
            photo_url: dto.photo_url,
            details: dto.details,
            present_address: dto.present_address,
            permanent_address: dto.permanent_address,
            same_as_present: dto.same_as_present,
            created_at,
            updated_at: None,
        }
    }

    fn merge(&mut self, dto: UpdateGuardianDto, _ids: &mut IdSequence) {
        merge_fields!(self, dto;
            set: [name, same_as_present],
            wrap: [phone, email, occupation, photo_url, details, present_address, permanent_address],
        );
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    fn matches(&self, filter: &GuardianFilterParams) -> bool {
        search_matches(
            filter.search.as_deref(),
            [
                Some(self.name.as_str()),
                self.email.as_deref(),
                self.phone.as_deref(),
                self.occupation.as_deref(),
            ],
        )
    }
}
