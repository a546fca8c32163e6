//! Pre-configured registry fixtures.

use mob_registry::{RegistryConfig, SessionRegistry};
use uuid::Uuid;

/// Test session fixture.
#[derive(Debug, Clone)]
pub struct TestSession {
    /// Session name.
    pub name: String,
    /// Mobsters to join, in order.
    pub mobsters: Vec<String>,
}

impl TestSession {
    /// Create a test session with the given name and no mobsters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobsters: Vec::new(),
        }
    }

    /// Create a test session with a random name.
    #[must_use]
    pub fn random() -> Self {
        Self::new(unique_session_name())
    }

    /// Add mobsters that join after the session is created.
    #[must_use]
    pub fn with_mobsters<I, S>(mut self, mobsters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mobsters.extend(mobsters.into_iter().map(Into::into));
        self
    }

    /// Create this session in `registry` and join its mobsters.
    ///
    /// # Panics
    ///
    /// Panics if the registry rejects any step.
    pub fn apply(&self, registry: &mut SessionRegistry) {
        registry
            .create_session(self.name.as_str())
            .unwrap_or_else(|e| panic!("create_session({:?}) failed: {e}", self.name));

        for mobster in &self.mobsters {
            registry
                .join_session(self.name.as_str(), mobster.as_str())
                .unwrap_or_else(|e| {
                    panic!("join_session({:?}, {mobster:?}) failed: {e}", self.name)
                });
        }
    }
}

/// Build an unlimited registry holding `sessions`, created in order.
#[must_use]
pub fn seeded_registry(sessions: &[TestSession]) -> SessionRegistry {
    seeded_registry_with_config(RegistryConfig::default(), sessions)
}

/// Build a registry bounded by `config` holding `sessions`.
#[must_use]
pub fn seeded_registry_with_config(
    config: RegistryConfig,
    sessions: &[TestSession],
) -> SessionRegistry {
    let mut registry = SessionRegistry::with_config(config);
    for session in sessions {
        session.apply(&mut registry);
    }
    registry
}

/// A session name no other test will pick.
#[must_use]
pub fn unique_session_name() -> String {
    format!("session-{}", Uuid::new_v4())
}
