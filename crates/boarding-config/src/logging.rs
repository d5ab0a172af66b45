use std::path::PathBuf;

use crate::{env_flag, env_or};

/// Logging configuration.
///
/// - `LOG_LEVEL`: default filter when `RUST_LOG` is unset (default: `info`)
/// - `LOG_DIR`: when set, a daily-rolling JSON log is written there
/// - `LOG_JSON`: emit console logs as JSON (default: false)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            json: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env_or("LOG_LEVEL", defaults.level),
            dir: std::env::var("LOG_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            json: env_flag("LOG_JSON", defaults.json),
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("boarding={level},boarding_cli={level}", level = self.level)
    }
}
