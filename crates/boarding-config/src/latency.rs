//! Simulated latency for repository calls.
//!
//! Every repository operation sleeps before touching its store. Each operation
//! has its own base delay:
//!
//! | operation | base |
//! |-----------|------|
//! | list      | 300 ms |
//! | get       | 200 ms |
//! | create    | 500 ms |
//! | update    | 500 ms |
//! | delete    | 300 ms |
//! | dropdown  | 200 ms |
//!
//! # Environment Variables
//!
//! - `MOCK_LATENCY_ENABLED`: turn simulated latency on or off (default: true)
//! - `MOCK_LATENCY_SCALE`: multiplier applied to every base delay (default: 1.0)
//! - `MOCK_LATENCY_JITTER_MS`: maximum random deviation in either direction (default: 100)

use crate::{env_flag, env_or};

#[derive(Clone, Debug, PartialEq)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub scale: f64,
    pub jitter_ms: u64,
    pub list_ms: u64,
    pub get_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub dropdown_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 1.0,
            jitter_ms: 100,
            list_ms: 300,
            get_ms: 200,
            create_ms: 500,
            update_ms: 500,
            delete_ms: 300,
            dropdown_ms: 200,
        }
    }
}

impl LatencyConfig {
    /// Creates a new `LatencyConfig` from environment variables.
    ///
    /// Base delays are fixed; the environment only toggles, scales and
    /// jitters them. See [`LatencyConfig::sanitize_scale`] for how the scale
    /// is bounded.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_flag("MOCK_LATENCY_ENABLED", defaults.enabled),
            scale: Self::sanitize_scale(env_or("MOCK_LATENCY_SCALE", defaults.scale)),
            jitter_ms: env_or("MOCK_LATENCY_JITTER_MS", defaults.jitter_ms),
            ..defaults
        }
    }

    /// A negative scale becomes zero. NaN and infinity fall back to 1.0.
    #[must_use]
    pub fn sanitize_scale(scale: f64) -> f64 {
        if scale.is_finite() { scale.max(0.0) } else { 1.0 }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Base delays without jitter. Makes sleeps exact for paused-clock tests.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            jitter_ms: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LatencyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.jitter_ms, 100);
        assert_eq!(config.list_ms, 300);
        assert_eq!(config.get_ms, 200);
        assert_eq!(config.create_ms, 500);
        assert_eq!(config.update_ms, 500);
        assert_eq!(config.delete_ms, 300);
        assert_eq!(config.dropdown_ms, 200);
    }

    #[test]
    fn test_sanitize_scale() {
        assert_eq!(LatencyConfig::sanitize_scale(0.5), 0.5);
        assert_eq!(LatencyConfig::sanitize_scale(-2.0), 0.0);
        assert_eq!(LatencyConfig::sanitize_scale(f64::INFINITY), 1.0);
        assert_eq!(LatencyConfig::sanitize_scale(f64::NAN), 1.0);
    }

    #[test]
    fn test_disabled_keeps_base_delays() {
        let config = LatencyConfig::disabled();
        assert!(!config.enabled);
        assert_eq!(config.create_ms, 500);
    }

    #[test]
    fn test_deterministic_has_no_jitter() {
        let config = LatencyConfig::deterministic();
        assert!(config.enabled);
        assert_eq!(config.jitter_ms, 0);
    }
}
