use boarding::fixtures::{Fixtures, address};
use boarding::state::AppState;
use boarding_config::AppConfig;
use boarding_models::{CreateEmployeeDto, CreateGuardianDto, ExperienceInput, HasProfile};
use chrono::NaiveDate;

/// Application state over the standard fixtures, with latency switched off.
pub fn test_state() -> AppState {
    AppState::from_fixtures(Fixtures::load().unwrap(), AppConfig::for_tests())
}

#[allow(dead_code)]
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

#[allow(dead_code)]
pub fn guardian_dto(name: &str) -> CreateGuardianDto {
    CreateGuardianDto {
        name: name.to_string(),
        phone: Some("+8801700000000".to_string()),
        email: Some(format!(
            "{}@example.com",
            name.to_lowercase().replace(' ', ".")
        )),
        occupation: Some("Pharmacist".to_string()),
        present_address: Some(address(&["n1", "d1", "dt1"])),
        ..CreateGuardianDto::default()
    }
}

/// A valid staff DTO copied from the first seeded staff member.
#[allow(dead_code)]
pub async fn staff_dto(state: &AppState) -> CreateEmployeeDto {
    let staff = state.staff.repository().get_by_id("st1").await.unwrap();
    CreateEmployeeDto::from(staff.profile())
}

#[allow(dead_code)]
pub fn experience(company: &str, start: &str, end: Option<&str>) -> ExperienceInput {
    ExperienceInput {
        id: None,
        company_name: company.to_string(),
        job_title: "Clerk".to_string(),
        start_date: date(start),
        end_date: end.map(date),
        responsibilities: "Record keeping".to_string(),
        achievements: None,
    }
}
