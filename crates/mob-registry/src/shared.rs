//! Cloneable registry handle for concurrent callers.
//!
//! One lock guards the whole registry, so a create and a join racing on
//! the same session are serialized and each call validates and mutates
//! under a single acquisition. Reads return owned copies because borrows
//! cannot outlive the guard.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::config::RegistryConfig;
use crate::errors::Result;
use crate::registry::SessionRegistry;
use crate::session::Session;

/// Consistent copy of every session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub sessions: Vec<Session>,
}

impl RegistrySnapshot {
    pub fn session_names(&self) -> Vec<&str> {
        self.sessions.iter().map(Session::name).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SharedSessionRegistry {
    inner: Arc<Mutex<SessionRegistry>>,
}

impl SharedSessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::from_registry(SessionRegistry::with_config(config))
    }

    /// Wrap an existing registry, keeping its sessions.
    #[must_use]
    pub fn from_registry(registry: SessionRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn list_available_sessions(&self) -> Vec<String> {
        let registry = self.inner.lock();
        registry
            .list_available_sessions()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// See [`SessionRegistry::create_session`].
    ///
    /// # Errors
    ///
    /// Same as [`SessionRegistry::create_session`].
    pub fn create_session<'a>(&self, name: impl Into<Option<&'a str>>) -> Result<()> {
        let mut registry = self.inner.lock();
        registry.create_session(name)
    }

    pub fn active_mobsters<'a>(&self, session_name: impl Into<Option<&'a str>>) -> Vec<String> {
        let registry = self.inner.lock();
        registry.active_mobsters(session_name).to_vec()
    }

    /// See [`SessionRegistry::join_session`].
    ///
    /// # Errors
    ///
    /// Same as [`SessionRegistry::join_session`].
    pub fn join_session<'a, 'b>(
        &self,
        session_name: impl Into<Option<&'a str>>,
        mobster_name: impl Into<Option<&'b str>>,
    ) -> Result<()> {
        let mut registry = self.inner.lock();
        registry.join_session(session_name, mobster_name)
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let registry = self.inner.lock();
        RegistrySnapshot {
            sessions: registry.sessions().cloned().collect(),
        }
    }
}
