//! # Boarding CLI
//!
//! Demo-data seeding for Boarding development.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use boarding::state::init_app_state;
//! use boarding_cli::seeder::{seed_all, SeedConfig};
//!
//! let state = init_app_state(AppConfig::load())?;
//! let summary = seed_all(&state, SeedConfig::new(20, 50)).await?;
//! ```

pub mod seeder;
