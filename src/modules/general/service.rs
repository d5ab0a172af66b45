use boarding_config::AppConfig;
use boarding_core::AppResult;
use boarding_models::{
    BloodGroup, Designation, Gender, Guardian, JobRule, MaritalStatus, Relation, Religion,
    ResidentialStatus, SimpleEntities,
};
use tracing::instrument;

use crate::populate::DetailPopulator;
use crate::repository::Repository;

/// Reference collections plus guardians.
#[derive(Debug, Clone)]
pub struct GeneralService {
    pub genders: Repository<Gender>,
    pub blood_groups: Repository<BloodGroup>,
    pub residential_statuses: Repository<ResidentialStatus>,
    pub religions: Repository<Religion>,
    pub designations: Repository<Designation>,
    pub relations: Repository<Relation>,
    pub marital_statuses: Repository<MaritalStatus>,
    pub job_rules: Repository<JobRule>,
    pub guardians: Repository<Guardian>,
}

impl GeneralService {
    pub fn new(seed: SimpleEntities, guardians: Vec<Guardian>, config: &AppConfig) -> Self {
        Self {
            genders: Repository::configured(seed.genders, config),
            blood_groups: Repository::configured(seed.blood_groups, config),
            residential_statuses: Repository::configured(seed.residential_statuses, config),
            religions: Repository::configured(seed.religions, config),
            designations: Repository::configured(seed.designations, config),
            relations: Repository::configured(seed.relations, config),
            marital_statuses: Repository::configured(seed.marital_statuses, config),
            job_rules: Repository::configured(seed.job_rules, config),
            guardians: Repository::configured(guardians, config),
        }
    }

    /// A populator resolving against this service's reference collections.
    pub fn populator(&self) -> DetailPopulator {
        DetailPopulator::new(
            self.designations.clone(),
            self.genders.clone(),
            self.blood_groups.clone(),
            self.religions.clone(),
            self.marital_statuses.clone(),
        )
    }

    /// Every reference collection at once, for form dropdowns.
    #[instrument(skip(self))]
    pub async fn get_all_simple_entities(&self) -> AppResult<SimpleEntities> {
        let (
            genders,
            blood_groups,
            residential_statuses,
            religions,
            relations,
            marital_statuses,
            job_rules,
            designations,
        ) = tokio::try_join!(
            self.genders.get_all_for_dropdown(),
            self.blood_groups.get_all_for_dropdown(),
            self.residential_statuses.get_all_for_dropdown(),
            self.religions.get_all_for_dropdown(),
            self.relations.get_all_for_dropdown(),
            self.marital_statuses.get_all_for_dropdown(),
            self.job_rules.get_all_for_dropdown(),
            self.designations.get_all_for_dropdown(),
        )?;

        Ok(SimpleEntities {
            genders,
            blood_groups,
            residential_statuses,
            religions,
            relations,
            marital_statuses,
            job_rules,
            designations,
        })
    }
}
