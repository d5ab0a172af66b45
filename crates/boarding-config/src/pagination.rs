use crate::env_or;

/// Page-size bounds applied by every repository `list`.
///
/// - `PAGINATION_DEFAULT_LIMIT`: limit used when a caller passes none (default: 10)
/// - `PAGINATION_MAX_LIMIT`: ceiling for caller-supplied limits (default: 100)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: i64,
    pub max_limit: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

impl PaginationConfig {
    /// Reads the bounds from the environment. The default limit never
    /// exceeds the maximum, and both are at least 1.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_limit = env_or("PAGINATION_MAX_LIMIT", defaults.max_limit).max(1);
        let default_limit = env_or("PAGINATION_DEFAULT_LIMIT", defaults.default_limit).clamp(1, max_limit);
        Self {
            default_limit,
            max_limit,
        }
    }
}
