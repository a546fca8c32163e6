//! A single mob programming session.

use serde::Serialize;

/// A named session and the mobsters who joined it, in join order.
///
/// Sessions are only created and grown by
/// [`SessionRegistry`](crate::registry::SessionRegistry), which enforces
/// that names are non-empty and mobsters are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    name: String,
    mobsters: Vec<String>,
}

impl Session {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            mobsters: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mobsters in the order they joined.
    pub fn mobsters(&self) -> &[String] {
        &self.mobsters
    }

    pub fn has_mobster(&self, mobster_name: &str) -> bool {
        self.mobsters.iter().any(|m| m == mobster_name)
    }

    pub fn mobster_count(&self) -> usize {
        self.mobsters.len()
    }

    /// Caller must have checked that `mobster_name` is non-empty and absent.
    pub(crate) fn push_mobster(&mut self, mobster_name: String) {
        self.mobsters.push(mobster_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new("pairing".to_string());

        assert_eq!(session.name(), "pairing");
        assert!(session.mobsters().is_empty());
        assert_eq!(session.mobster_count(), 0);
    }

    #[test]
    fn test_push_mobster_preserves_order() {
        let mut session = Session::new("kata".to_string());
        session.push_mobster("Bob".to_string());
        session.push_mobster("Amy".to_string());

        assert_eq!(session.mobsters(), ["Bob", "Amy"]);
        assert!(session.has_mobster("Amy"));
        assert!(!session.has_mobster("amy"));
        assert_eq!(session.mobster_count(), 2);
    }
}
