use boarding_config::AppConfig;

use crate::fixtures::Fixtures;
use crate::modules::employees::EmployeeService;
use crate::modules::{GeneralService, StaffService, StudentService, TeacherService};
use crate::repository::Repository;

/// Every service of one process, each over its own seeded store.
#[derive(Clone, Debug)]
pub struct AppState {
    pub general: GeneralService,
    pub staff: StaffService,
    pub teachers: TeacherService,
    pub students: StudentService,
    pub config: AppConfig,
}

impl AppState {
    pub fn from_fixtures(fixtures: Fixtures, config: AppConfig) -> Self {
        let general = GeneralService::new(fixtures.reference, fixtures.guardians, &config);
        let populator = general.populator();

        Self {
            staff: EmployeeService::new(
                Repository::configured(fixtures.staff, &config),
                populator.clone(),
            ),
            teachers: EmployeeService::new(
                Repository::configured(fixtures.teachers, &config),
                populator.clone(),
            ),
            students: StudentService::new(
                Repository::configured(fixtures.students, &config),
                populator,
            ),
            general,
            config,
        }
    }
}

/// Builds the application state over the standard fixtures.
pub fn init_app_state(config: AppConfig) -> Result<AppState, serde_json::Error> {
    let fixtures = Fixtures::load()?;
    Ok(AppState::from_fixtures(fixtures, config))
}
