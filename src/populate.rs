//! Detail population: resolving foreign-key ids to `{id, name}` projections.
//!
//! Reference collections are fetched once per populated page and indexed by
//! id; every row of the page resolves against the same indexes. Ids that no
//! longer resolve are dropped.

use std::collections::HashMap;
use std::marker::PhantomData;

use boarding_core::AppResult;
use boarding_models::ids::{BloodGroupId, DesignationId, GenderId, MaritalStatusId, ReligionId};
use boarding_models::{
    BloodGroup, Designation, EmployeeDetail, Gender, HasProfile, MaritalStatus, Named, NamedRef,
    Religion, Student, StudentDetail,
};
use tracing::instrument;

use crate::repository::Repository;

/// Id → name lookup for one reference collection.
#[derive(Debug, Clone)]
pub struct ReferenceIndex<I> {
    names: HashMap<String, String>,
    _id: PhantomData<fn(&I)>,
}

impl<I: AsRef<str>> ReferenceIndex<I> {
    pub fn from_records<R: Named>(records: &[R]) -> Self {
        Self {
            names: records
                .iter()
                .map(|record| (record.key().to_owned(), record.name().to_owned()))
                .collect(),
            _id: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn resolve(&self, id: &I) -> Option<NamedRef> {
        let id = id.as_ref();
        self.names.get(id).map(|name| NamedRef::new(id, name.as_str()))
    }

    pub fn resolve_opt(&self, id: Option<&I>) -> Option<NamedRef> {
        id.and_then(|id| self.resolve(id))
    }

    /// Resolves every id in order, skipping orphans.
    pub fn resolve_all(&self, ids: &[I]) -> Vec<NamedRef> {
        ids.iter().filter_map(|id| self.resolve(id)).collect()
    }
}

/// The reference indexes a page of employee or student details needs.
#[derive(Debug, Clone)]
pub struct Lookups {
    pub designations: ReferenceIndex<DesignationId>,
    pub genders: ReferenceIndex<GenderId>,
    pub blood_groups: ReferenceIndex<BloodGroupId>,
    pub religions: ReferenceIndex<ReligionId>,
    pub marital_statuses: ReferenceIndex<MaritalStatusId>,
}

impl Lookups {
    pub fn employee_detail<T: HasProfile>(&self, record: T) -> EmployeeDetail<T> {
        let profile = record.profile();
        let designations = self.designations.resolve_all(&profile.designation_ids);
        let gender = self.genders.resolve(&profile.gender_id);
        let blood_group = self.blood_groups.resolve_opt(profile.blood_group_id.as_ref());
        let religion = self.religions.resolve_opt(profile.religion_id.as_ref());
        let marital_status = self.marital_statuses.resolve(&profile.marital_status_id);

        EmployeeDetail {
            record,
            designations,
            gender,
            blood_group,
            religion,
            marital_status,
        }
    }

    pub fn student_detail(&self, student: Student) -> StudentDetail {
        StudentDetail {
            gender: self.genders.resolve(&student.gender_id),
            blood_group: self.blood_groups.resolve_opt(student.blood_group_id.as_ref()),
            religion: self.religions.resolve_opt(student.religion_id.as_ref()),
            student,
        }
    }
}

/// Loads the reference collections behind [`Lookups`].
#[derive(Debug, Clone)]
pub struct DetailPopulator {
    designations: Repository<Designation>,
    genders: Repository<Gender>,
    blood_groups: Repository<BloodGroup>,
    religions: Repository<Religion>,
    marital_statuses: Repository<MaritalStatus>,
}

impl DetailPopulator {
    pub fn new(
        designations: Repository<Designation>,
        genders: Repository<Gender>,
        blood_groups: Repository<BloodGroup>,
        religions: Repository<Religion>,
        marital_statuses: Repository<MaritalStatus>,
    ) -> Self {
        Self {
            designations,
            genders,
            blood_groups,
            religions,
            marital_statuses,
        }
    }

    /// Fetches each reference collection once, concurrently.
    #[instrument(skip(self))]
    pub async fn load(&self) -> AppResult<Lookups> {
        let (designations, genders, blood_groups, religions, marital_statuses) = tokio::try_join!(
            self.designations.get_all_for_dropdown(),
            self.genders.get_all_for_dropdown(),
            self.blood_groups.get_all_for_dropdown(),
            self.religions.get_all_for_dropdown(),
            self.marital_statuses.get_all_for_dropdown(),
        )?;

        Ok(Lookups {
            designations: ReferenceIndex::from_records(&designations),
            genders: ReferenceIndex::from_records(&genders),
            blood_groups: ReferenceIndex::from_records(&blood_groups),
            religions: ReferenceIndex::from_records(&religions),
            marital_statuses: ReferenceIndex::from_records(&marital_statuses),
        })
    }
}
