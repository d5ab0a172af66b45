//! # Boarding Config
//!
//! Environment-driven configuration. Every config struct has a `Default`
//! impl and a `from_env()` constructor that falls back to the defaults for
//! unset or unparsable variables.
//!
//! - [`latency`]: simulated network latency for repository calls
//! - [`pagination`]: default and maximum page sizes
//! - [`logging`]: log level, optional log directory and JSON output
//!
//! # Example
//!
//! ```ignore
//! use boarding_config::AppConfig;
//!
//! // Reads .env (if present) and the process environment.
//! let config = AppConfig::load();
//! println!("latency enabled: {}", config.latency.enabled);
//! ```

pub mod latency;
pub mod logging;
pub mod pagination;

use std::str::FromStr;

pub use latency::LatencyConfig;
pub use logging::LogConfig;
pub use pagination::PaginationConfig;

/// Reads and parses an environment variable, falling back to `default`.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads a boolean flag. Accepts `true/false`, `1/0`, `yes/no` and `on/off`.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

/// Top-level configuration for a Boarding process.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub latency: LatencyConfig,
    pub pagination: PaginationConfig,
    pub log: LogConfig,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            latency: LatencyConfig::from_env(),
            pagination: PaginationConfig::from_env(),
            log: LogConfig::from_env(),
        }
    }

    /// Loads `.env` into the environment (when present), then reads it.
    #[must_use]
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Configuration for tests: no simulated latency, default paging.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            latency: LatencyConfig::disabled(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_when_unset() {
        assert_eq!(env_or("BOARDING_TEST_UNSET_NUMBER", 7u64), 7);
    }

    #[test]
    fn test_env_flag_falls_back_when_unset() {
        assert!(env_flag("BOARDING_TEST_UNSET_FLAG", true));
        assert!(!env_flag("BOARDING_TEST_UNSET_FLAG", false));
    }

    #[test]
    fn test_for_tests_disables_latency() {
        let config = AppConfig::for_tests();
        assert!(!config.latency.enabled);
        assert_eq!(config.pagination, PaginationConfig::default());
    }
}
