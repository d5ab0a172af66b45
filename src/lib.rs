//! # Boarding
//!
//! The data layer of a school administration app: reference collections,
//! guardians, staff, teachers and students, each held in an in-memory store
//! behind a generic paginated repository with simulated network latency.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── entity.rs        # The Entity trait every stored type implements
//! ├── store.rs         # Newest-first in-memory store and id sequence
//! ├── repository.rs    # list / get / create / update / delete / dropdown
//! ├── latency.rs       # Simulated per-operation latency with jitter
//! ├── populate.rs      # Foreign-key → {id, name} resolution for detail views
//! ├── container.rs     # View state with stale-response discard
//! ├── changes.rs       # Changed-field diffing for edit forms
//! ├── fixtures.rs      # Seed data
//! ├── state.rs         # AppState: every service over its own store
//! ├── logging.rs       # tracing subscriber setup
//! ├── metrics.rs       # Operation counters
//! └── modules/
//!     ├── general/     # Reference entities and guardians
//!     ├── employees/   # Staff and teachers
//!     └── students/    # Students
//! ```
//!
//! Shared types live in the workspace crates: `boarding-core` (errors,
//! pagination, validation), `boarding-models` (entities and DTOs) and
//! `boarding-config` (environment configuration).
//!
//! ## Example
//!
//! ```ignore
//! use boarding::state::init_app_state;
//! use boarding_config::AppConfig;
//! use boarding_core::ListQuery;
//!
//! let state = init_app_state(AppConfig::load())?;
//! let page = state.general.blood_groups.list(ListQuery::default()).await?;
//! assert_eq!(page.total, 8);
//! ```

pub mod changes;
pub mod container;
pub mod entity;
pub mod fixtures;
pub mod latency;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod populate;
pub mod repository;
pub mod state;
pub mod store;
