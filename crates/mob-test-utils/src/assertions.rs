//! Custom test assertions for expressive registry tests.

use mob_registry::{SessionRegistry, SharedSessionRegistry};

/// Assertions over registry state.
///
/// # Example
/// ```rust,ignore
/// registry
///     .assert_sessions(&["kata"])
///     .assert_mobsters("kata", &["Bob", "Amy"]);
/// ```
pub trait RegistryAssertions {
    /// Assert the exact session names, in creation order.
    fn assert_sessions(&self, expected: &[&str]) -> &Self;

    /// Assert the exact mobsters of a session, in join order.
    fn assert_mobsters(&self, session_name: &str, expected: &[&str]) -> &Self;

    /// Assert that a session has no mobsters (or does not exist).
    fn assert_no_mobsters(&self, session_name: &str) -> &Self {
        self.assert_mobsters(session_name, &[])
    }
}

impl RegistryAssertions for SessionRegistry {
    fn assert_sessions(&self, expected: &[&str]) -> &Self {
        assert_eq!(
            self.list_available_sessions(),
            expected,
            "unexpected session list"
        );
        self
    }

    fn assert_mobsters(&self, session_name: &str, expected: &[&str]) -> &Self {
        assert_eq!(
            self.active_mobsters(session_name),
            expected,
            "unexpected mobsters in session {session_name:?}"
        );
        self
    }
}

impl RegistryAssertions for SharedSessionRegistry {
    fn assert_sessions(&self, expected: &[&str]) -> &Self {
        assert_eq!(
            self.list_available_sessions(),
            expected,
            "unexpected session list"
        );
        self
    }

    fn assert_mobsters(&self, session_name: &str, expected: &[&str]) -> &Self {
        assert_eq!(
            self.active_mobsters(session_name),
            expected,
            "unexpected mobsters in session {session_name:?}"
        );
        self
    }
}
