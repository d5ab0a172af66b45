use anyhow::Context;
use boarding::entity::Entity;
use boarding::logging::init_tracing;
use boarding::repository::Repository;
use boarding::state::{AppState, init_app_state};
use boarding_cli::seeder::{self, SeedConfig};
use boarding_config::AppConfig;
use boarding_core::{ListQuery, PaginationParams};
use boarding_models::CreateGuardianDto;
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Input;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Parser)]
#[command(name = "boarding-cli")]
#[command(about = "Boarding CLI - Browse and seed school admin data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of records
    List {
        entity: EntityKind,

        /// 1-based page number
        #[arg(short = 'p', long, default_value = "1")]
        page: i64,

        /// Records per page
        #[arg(short = 'l', long, default_value = "10")]
        limit: i64,

        /// Case-insensitive search text
        #[arg(short = 's', long)]
        search: Option<String>,
    },
    /// Show one record by id
    Show { entity: EntityKind, id: String },
    /// Delete one record by id
    Delete { entity: EntityKind, id: String },
    /// Create a guardian (prompts for the name if not provided)
    CreateGuardian {
        #[arg(short = 'n', long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(short = 'e', long)]
        email: Option<String>,

        #[arg(short = 'o', long)]
        occupation: Option<String>,
    },
    /// Every reference collection plus the student dropdown
    Dropdowns,
    /// Seed fake guardians and students
    Seed {
        /// Number of guardians to create
        #[arg(short = 'g', long, default_value = "20")]
        guardians: usize,

        /// Number of students to create
        #[arg(short = 's', long, default_value = "50")]
        students: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EntityKind {
    Genders,
    BloodGroups,
    ResidentialStatuses,
    Religions,
    Designations,
    Relations,
    MaritalStatuses,
    JobRules,
    Guardians,
    Staff,
    Teachers,
    Students,
}

/// Runs `$body` with `$repo` bound to the repository behind `$kind`.
macro_rules! with_repository {
    ($state:expr, $kind:expr, |$repo:ident| $body:expr) => {
        match $kind {
            EntityKind::Genders => {
                let $repo = &$state.general.genders;
                $body
            }
            EntityKind::BloodGroups => {
                let $repo = &$state.general.blood_groups;
                $body
            }
            EntityKind::ResidentialStatuses => {
                let $repo = &$state.general.residential_statuses;
                $body
            }
            EntityKind::Religions => {
                let $repo = &$state.general.religions;
                $body
            }
            EntityKind::Designations => {
                let $repo = &$state.general.designations;
                $body
            }
            EntityKind::Relations => {
                let $repo = &$state.general.relations;
                $body
            }
            EntityKind::MaritalStatuses => {
                let $repo = &$state.general.marital_statuses;
                $body
            }
            EntityKind::JobRules => {
                let $repo = &$state.general.job_rules;
                $body
            }
            EntityKind::Guardians => {
                let $repo = &$state.general.guardians;
                $body
            }
            EntityKind::Staff => {
                let $repo = $state.staff.repository();
                $body
            }
            EntityKind::Teachers => {
                let $repo = $state.teachers.repository();
                $body
            }
            EntityKind::Students => {
                let $repo = $state.students.repository();
                $body
            }
        }
    };
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = AppConfig::load();

    if let Err(e) = init_tracing(&config.log) {
        eprintln!("⚠️  Logging disabled: {e:#}");
    }

    let state = match init_app_state(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("\n❌ Error loading fixtures: {}", e);
            std::process::exit(1);
        }
    };

    let (action, result) = match cli.command {
        Commands::List {
            entity,
            page,
            limit,
            search,
        } => ("listing", handle_list(&state, entity, page, limit, search).await),
        Commands::Show { entity, id } => ("loading", handle_show(&state, entity, &id).await),
        Commands::Delete { entity, id } => ("deleting", handle_delete(&state, entity, &id).await),
        Commands::CreateGuardian {
            name,
            phone,
            email,
            occupation,
        } => (
            "creating guardian",
            handle_create_guardian(&state, name, phone, email, occupation).await,
        ),
        Commands::Dropdowns => ("loading dropdowns", handle_dropdowns(&state).await),
        Commands::Seed {
            guardians,
            students,
        } => ("seeding", handle_seed(&state, guardians, students).await),
    };

    match result.and_then(|value| serde_json::to_string_pretty(&value).map_err(Into::into)) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("\n❌ Error {}: {:#}", action, e);
            std::process::exit(1);
        }
    }
}

async fn handle_list(
    state: &AppState,
    entity: EntityKind,
    page: i64,
    limit: i64,
    search: Option<String>,
) -> anyhow::Result<Value> {
    let pagination = PaginationParams::new(page, limit);

    // Employees and students list with their references resolved.
    match entity {
        EntityKind::Staff => {
            let query = ListQuery::new(pagination, search_filter(search)?);
            to_json(&state.staff.list(query).await?)
        }
        EntityKind::Teachers => {
            let query = ListQuery::new(pagination, search_filter(search)?);
            to_json(&state.teachers.list(query).await?)
        }
        EntityKind::Students => {
            let query = ListQuery::new(pagination, search_filter(search)?);
            to_json(&state.students.list_details(query).await?)
        }
        kind => with_repository!(state, kind, |repository| {
            list_page(repository, pagination, search).await
        }),
    }
}

async fn list_page<E>(
    repository: &Repository<E>,
    pagination: PaginationParams,
    search: Option<String>,
) -> anyhow::Result<Value>
where
    E: Entity + Serialize,
    E::Filter: DeserializeOwned,
{
    let query = ListQuery::new(pagination, search_filter(search)?);
    to_json(&repository.list(query).await?)
}

/// Every filter type accepts a `search` key; the rest default to unset.
fn search_filter<F: DeserializeOwned>(search: Option<String>) -> anyhow::Result<F> {
    serde_json::from_value(json!({ "search": search })).context("Invalid search filter")
}

async fn handle_show(state: &AppState, entity: EntityKind, id: &str) -> anyhow::Result<Value> {
    match entity {
        EntityKind::Staff => to_json(&state.staff.get_by_id(id).await?),
        EntityKind::Teachers => to_json(&state.teachers.get_by_id(id).await?),
        EntityKind::Students => to_json(&state.students.get_detail_by_id(id).await?),
        kind => with_repository!(state, kind, |repository| {
            to_json(&repository.get_by_id(id).await?)
        }),
    }
}

async fn handle_delete(state: &AppState, entity: EntityKind, id: &str) -> anyhow::Result<Value> {
    with_repository!(state, entity, |repository| {
        repository.delete(id).await?;
        Ok(json!({ "deleted": id, "remaining": repository.count().await }))
    })
}

async fn handle_create_guardian(
    state: &AppState,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    occupation: Option<String>,
) -> anyhow::Result<Value> {
    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Guardian name")
            .interact_text()
            .context("Failed to read guardian name")?,
    };

    let phone = match phone {
        Some(phone) => Some(phone),
        None => optional_prompt("Phone (optional)")?,
    };

    let dto = CreateGuardianDto {
        name,
        phone,
        email,
        occupation,
        ..CreateGuardianDto::default()
    };

    let guardian = state.general.guardians.create(dto).await?;
    eprintln!("\n✅ Guardian {} created successfully!", guardian.id);
    to_json(&guardian)
}

fn optional_prompt(prompt: &str) -> anyhow::Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {prompt}"))?;
    Ok(Some(value.trim().to_owned()).filter(|v| !v.is_empty()))
}

async fn handle_dropdowns(state: &AppState) -> anyhow::Result<Value> {
    let (simple, students) = tokio::try_join!(
        state.general.get_all_simple_entities(),
        state.students.get_all_students_for_dropdown(),
    )?;
    Ok(json!({ "simpleEntities": simple, "students": students }))
}

async fn handle_seed(state: &AppState, guardians: usize, students: usize) -> anyhow::Result<Value> {
    let config = SeedConfig::default()
        .with_guardians(guardians)
        .with_students(students);
    let summary = seeder::seed_all(state, config).await?;
    to_json(&summary)
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<Value> {
    serde_json::to_value(value).context("Failed to serialize output")
}
