//! Demo-data seeding.
//!
//! Generation runs in parallel on the rayon pool. Inserts go through the
//! repositories, so every generated record is validated, gets a store id and
//! pays the configured simulated latency like any other create.

mod guardians;
mod models;
mod students;

use std::time::Instant;

use boarding::state::AppState;

pub use guardians::{generate_guardians, seed_guardians};
pub use models::{SeedConfig, SeedSummary, StudentReferences};
pub use students::{generate_students, seed_students};

/// Reads the reference ids generated students may point at.
pub async fn student_references(state: &AppState) -> anyhow::Result<StudentReferences> {
    let (genders, blood_groups, religions) = tokio::try_join!(
        state.general.genders.get_all_for_dropdown(),
        state.general.blood_groups.get_all_for_dropdown(),
        state.general.religions.get_all_for_dropdown(),
    )?;

    Ok(StudentReferences {
        genders: genders.into_iter().map(|g| g.id).collect(),
        blood_groups: blood_groups.into_iter().map(|b| b.id).collect(),
        religions: religions.into_iter().map(|r| r.id).collect(),
    })
}

/// Seeds guardians, then students, and reports the resulting counts.
pub async fn seed_all(state: &AppState, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    eprintln!("🌱 Seeding {} records...", config.total());

    let guardians = seed_guardians(&state.general.guardians, config.guardians).await?;

    let references = student_references(state).await?;
    let students = seed_students(state.students.repository(), &references, config.students).await?;

    let summary = SeedSummary {
        guardians_created: guardians.len(),
        students_created: students.len(),
        total_guardians: state.general.guardians.count().await,
        total_students: state.students.repository().count().await,
    };

    eprintln!("✅ Seeding complete in {:?}", start_time.elapsed());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boarding::state::init_app_state;
    use boarding_config::AppConfig;

    #[tokio::test]
    async fn test_seed_all_grows_the_stores() {
        let state = init_app_state(AppConfig::for_tests()).unwrap();
        let guardians_before = state.general.guardians.count().await;
        let students_before = state.students.repository().count().await;

        let summary = seed_all(&state, SeedConfig::new(3, 4)).await.unwrap();

        assert_eq!(summary.guardians_created, 3);
        assert_eq!(summary.students_created, 4);
        assert_eq!(summary.total_guardians, guardians_before + 3);
        assert_eq!(summary.total_students, students_before + 4);
    }

    #[tokio::test]
    async fn test_seeded_students_resolve_their_gender() {
        let state = init_app_state(AppConfig::for_tests()).unwrap();
        let students = seed_students(
            state.students.repository(),
            &student_references(&state).await.unwrap(),
            2,
        )
        .await
        .unwrap();

        for student in students {
            let detail = state
                .students
                .get_detail_by_id(student.id.as_str())
                .await
                .unwrap();
            assert!(detail.gender.is_some());
        }
    }
}
