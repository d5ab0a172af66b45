//! Student seeding functionality.

use std::time::Instant;

use anyhow::{Context, bail};
use boarding::repository::Repository;
use boarding_models::{CreateStudentDto, Status, Student};
use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use tokio::task::JoinSet;

use super::guardians::email_part;
use super::models::StudentReferences;

/// Generates `count` valid student DTOs pointing at `references`.
///
/// Returns an empty list when no gender is available, since gender is
/// required.
pub fn generate_students(count: usize, references: &StudentReferences) -> Vec<CreateStudentDto> {
    (0..count)
        .into_par_iter()
        .filter_map(|index| generate_student(index, references))
        .collect()
}

fn generate_student(index: usize, references: &StudentReferences) -> Option<CreateStudentDto> {
    let gender_id = pick(&references.genders, index)?.clone();
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let father_first: String = FirstName().fake();
    let mother_first: String = FirstName().fake();

    let year: i32 = (2008..2018).fake();
    let month: u32 = (1..13).fake();
    let day: u32 = (1..29).fake();
    let brn: u64 = (10u64.pow(16)..10u64.pow(17)).fake();

    Some(CreateStudentDto {
        email: Some(format!(
            "{}.{}+student{}@example.com",
            email_part(&first_name),
            email_part(&last_name),
            index
        )),
        father_name: format!("{father_first} {last_name}"),
        mother_name: format!("{mother_first} {last_name}"),
        date_of_birth: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        health_condition: None,
        nid_number: None,
        brn_number: Some(brn.to_string()),
        gender_id,
        blood_group_id: pick(&references.blood_groups, index).cloned(),
        religion_id: pick(&references.religions, index).cloned(),
        nationality_id: Some("n1".into()),
        present_address: None,
        permanent_address: None,
        same_as_present: false,
        student_photo: None,
        student_nid: None,
        student_brn: None,
        father_nid: None,
        mother_nid: None,
        digital_signature: None,
        status: Status::Active,
        first_name,
        last_name,
    })
}

fn pick<T>(items: &[T], index: usize) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    items.get((index + (0..items.len()).fake::<usize>()) % items.len())
}

/// Seeds `count` students and returns the created records.
pub async fn seed_students(
    repository: &Repository<Student>,
    references: &StudentReferences,
    count: usize,
) -> anyhow::Result<Vec<Student>> {
    let start_time = Instant::now();
    eprintln!("🎓 Seeding {count} students...");

    let dtos = generate_students(count, references);
    if dtos.len() < count {
        bail!("Cannot seed students without at least one gender");
    }

    let mut tasks = JoinSet::new();
    for dto in dtos {
        let repository = repository.clone();
        tasks.spawn(async move { repository.create(dto).await });
    }

    let mut created = Vec::with_capacity(count);
    while let Some(joined) = tasks.join_next().await {
        let student = joined
            .context("Student insert task panicked")?
            .context("Failed to insert generated student")?;
        created.push(student);
    }

    eprintln!(
        "   ✓ Inserted {} students in {:?}",
        created.len(),
        start_time.elapsed()
    );

    Ok(created)
}
