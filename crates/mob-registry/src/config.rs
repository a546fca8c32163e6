//! Session registry configuration.
//!
//! Configuration is loaded from environment variables. Every limit is
//! optional; an unset variable leaves that axis unlimited.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Environment variable capping the number of sessions in a registry.
pub const MAX_SESSIONS_VAR: &str = "MOB_MAX_SESSIONS";

/// Environment variable capping the number of mobsters in one session.
pub const MAX_MOBSTERS_PER_SESSION_VAR: &str = "MOB_MAX_MOBSTERS_PER_SESSION";

/// Session registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum number of sessions (`None` = unlimited).
    pub max_sessions: Option<usize>,

    /// Maximum number of mobsters per session (`None` = unlimited).
    pub max_mobsters_per_session: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a `HashMap` (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let max_sessions = parse_limit(vars, MAX_SESSIONS_VAR)?;
        let max_mobsters_per_session = parse_limit(vars, MAX_MOBSTERS_PER_SESSION_VAR)?;

        Ok(RegistryConfig {
            max_sessions,
            max_mobsters_per_session,
        })
    }

    /// Set the session limit.
    #[must_use]
    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.max_sessions = Some(max);
        self
    }

    /// Set the per-session mobster limit.
    #[must_use]
    pub fn with_max_mobsters_per_session(mut self, max: usize) -> Self {
        self.max_mobsters_per_session = Some(max);
        self
    }
}

/// Limits must be positive integers; zero would make the registry unusable.
fn parse_limit(vars: &HashMap<String, String>, name: &str) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = vars.get(name) else {
        return Ok(None);
    };

    let value: usize = raw.trim().parse().map_err(|e| {
        ConfigError::InvalidValue(format!("{name} must be a positive integer, got '{raw}': {e}"))
    })?;

    if value == 0 {
        return Err(ConfigError::InvalidValue(format!(
            "{name} must be greater than zero"
        )));
    }

    Ok(Some(value))
}
