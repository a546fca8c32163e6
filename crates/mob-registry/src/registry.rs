//! In-memory registry of mob programming sessions.
//!
//! The registry owns every [`Session`] and enforces:
//!
//! - session names are non-empty and unique (exact, case-sensitive match)
//! - a mobster appears at most once per session
//! - sessions and mobsters are only ever appended, never removed
//!
//! Every rejected call leaves the registry untouched. Absent and empty names
//! are treated alike, so operations take `impl Into<Option<&str>>` and accept
//! both `"name"` and `None`.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::errors::{RegistryError, Result};
use crate::session::Session;

/// Owned registry of sessions, in creation order.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    config: RegistryConfig,
    sessions: Vec<Session>,
    /// Session name -> position in `sessions`.
    index: HashMap<String, usize>,
}

impl SessionRegistry {
    /// Create an empty registry without capacity limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry bounded by `config`.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Names of all sessions, oldest first.
    pub fn list_available_sessions(&self) -> Vec<&str> {
        self.sessions.iter().map(Session::name).collect()
    }

    /// Create a new, empty session.
    ///
    /// # Errors
    ///
    /// - `MissingSessionName` if `name` is absent or empty
    /// - `DuplicateSessionName` if a session with this name exists
    /// - `SessionCapacityExceeded` if the configured session limit is reached
    pub fn create_session<'a>(&mut self, name: impl Into<Option<&'a str>>) -> Result<()> {
        let name = present(name.into())
            .ok_or(RegistryError::MissingSessionName)
            .map_err(|e| rejected("create_session", e))?;

        if self.index.contains_key(name) {
            return Err(rejected(
                "create_session",
                RegistryError::DuplicateSessionName,
            ));
        }

        if let Some(max) = self.config.max_sessions {
            if self.sessions.len() >= max {
                return Err(rejected(
                    "create_session",
                    RegistryError::SessionCapacityExceeded { max },
                ));
            }
        }

        self.index.insert(name.to_string(), self.sessions.len());
        self.sessions.push(Session::new(name.to_string()));

        info!(
            target: "mob.registry",
            session = %name,
            session_count = self.sessions.len(),
            "Session created"
        );

        Ok(())
    }

    /// Mobsters of the named session in join order.
    ///
    /// Unknown, absent, or empty session names yield an empty slice rather
    /// than an error.
    pub fn active_mobsters<'a>(&self, session_name: impl Into<Option<&'a str>>) -> &[String] {
        present(session_name.into())
            .and_then(|name| self.session(name))
            .map(Session::mobsters)
            .unwrap_or_default()
    }

    /// Add `mobster_name` to the end of the named session.
    ///
    /// Checks run in a fixed order, so the first failing one decides the
    /// error: session name, mobster name, session existence, duplicate
    /// mobster, then capacity.
    ///
    /// # Errors
    ///
    /// - `MissingSessionName` if `session_name` is absent or empty
    /// - `MissingMobsterName` if `mobster_name` is absent or empty
    /// - `SessionNotFound` if no session has that name
    /// - `DuplicateParticipant` if the mobster already joined it
    /// - `MobsterCapacityExceeded` if the configured per-session limit is reached
    pub fn join_session<'a, 'b>(
        &mut self,
        session_name: impl Into<Option<&'a str>>,
        mobster_name: impl Into<Option<&'b str>>,
    ) -> Result<()> {
        let session_name = present(session_name.into())
            .ok_or(RegistryError::MissingSessionName)
            .map_err(|e| rejected("join_session", e))?;

        let mobster_name = present(mobster_name.into())
            .ok_or(RegistryError::MissingMobsterName)
            .map_err(|e| rejected("join_session", e))?;

        let max_mobsters = self.config.max_mobsters_per_session;

        let session = self
            .index
            .get(session_name)
            .and_then(|&idx| self.sessions.get_mut(idx))
            .ok_or(RegistryError::SessionNotFound)
            .map_err(|e| rejected("join_session", e))?;

        if session.has_mobster(mobster_name) {
            return Err(rejected(
                "join_session",
                RegistryError::DuplicateParticipant,
            ));
        }

        if let Some(max) = max_mobsters {
            if session.mobster_count() >= max {
                return Err(rejected(
                    "join_session",
                    RegistryError::MobsterCapacityExceeded { max },
                ));
            }
        }

        session.push_mobster(mobster_name.to_string());

        info!(
            target: "mob.registry",
            session = %session_name,
            mobster = %mobster_name,
            mobster_count = session.mobster_count(),
            "Mobster joined session"
        );

        Ok(())
    }

    /// Look up a session by its exact name.
    pub fn session(&self, name: &str) -> Option<&Session> {
        self.index.get(name).and_then(|&idx| self.sessions.get(idx))
    }

    /// All sessions, oldest first.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn present(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

fn rejected(operation: &'static str, err: RegistryError) -> RegistryError {
    debug!(
        target: "mob.registry",
        operation,
        error_code = err.error_code(),
        missing_input = err.is_missing_input(),
        "Registry operation rejected"
    );
    err
}
