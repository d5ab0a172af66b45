//! Guardian seeding functionality.
//!
//! Generates fake guardians in parallel and inserts them through the
//! guardian repository.

use std::time::Instant;

use anyhow::Context;
use boarding::repository::Repository;
use boarding_models::{CreateGuardianDto, Guardian};
use fake::Fake;
use fake::faker::company::en::Profession;
use fake::faker::name::en::*;
use rayon::prelude::*;
use tokio::task::JoinSet;

/// Generates `count` valid guardian DTOs.
pub fn generate_guardians(count: usize) -> Vec<CreateGuardianDto> {
    (0..count).into_par_iter().map(generate_guardian).collect()
}

fn generate_guardian(index: usize) -> CreateGuardianDto {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let number: u64 = (100_000_000..999_999_999).fake();

    CreateGuardianDto {
        email: Some(format!(
            "{}.{}+guardian{}@example.com",
            email_part(&first_name),
            email_part(&last_name),
            index
        )),
        name: format!("{first_name} {last_name}"),
        phone: Some(format!("+8801{number}")),
        occupation: Some(Profession().fake()),
        ..CreateGuardianDto::default()
    }
}

/// Lowercase alphanumerics only, so generated addresses always validate.
pub(crate) fn email_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

/// Seeds `count` guardians and returns the created records.
pub async fn seed_guardians(
    repository: &Repository<Guardian>,
    count: usize,
) -> anyhow::Result<Vec<Guardian>> {
    let start_time = Instant::now();
    eprintln!("👪 Seeding {count} guardians...");

    let dtos = generate_guardians(count);
    let mut tasks = JoinSet::new();
    for dto in dtos {
        let repository = repository.clone();
        tasks.spawn(async move { repository.create(dto).await });
    }

    let mut created = Vec::with_capacity(count);
    while let Some(joined) = tasks.join_next().await {
        let guardian = joined
            .context("Guardian insert task panicked")?
            .context("Failed to insert generated guardian")?;
        created.push(guardian);
    }

    eprintln!(
        "   ✓ Inserted {} guardians in {:?}",
        created.len(),
        start_time.elapsed()
    );

    Ok(created)
}
