//! Session registry error types.
//!
//! The `Display` text of every variant is the message shown to the mobster,
//! so it must stay stable. Error codes follow the signaling `ErrorCode`
//! numbering used by outer layers.

use thiserror::Error;

/// Error returned by a rejected registry operation.
///
/// Maps to signaling `ErrorCode` values:
/// - `MissingSessionName`, `MissingMobsterName`: `INVALID_REQUEST` (1)
/// - `SessionNotFound`: `NOT_FOUND` (4)
/// - `DuplicateSessionName`, `DuplicateParticipant`: `CONFLICT` (5)
/// - `SessionCapacityExceeded`, `MobsterCapacityExceeded`: `CAPACITY_EXCEEDED` (7)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Session name absent or empty where one is required.
    #[error("You must provide a session name")]
    MissingSessionName,

    /// A session with this name already exists.
    #[error("You must provide a different session name")]
    DuplicateSessionName,

    /// Mobster name absent or empty at join time.
    #[error("You must provide your name")]
    MissingMobsterName,

    /// Join targets a session that was never created.
    #[error("You must provide the name of a current session")]
    SessionNotFound,

    /// The mobster already participates in the session.
    #[error("You may not join the same session twice")]
    DuplicateParticipant,

    /// The registry holds its configured maximum of sessions.
    #[error("The maximum of {max} sessions has been reached")]
    SessionCapacityExceeded { max: usize },

    /// The session holds its configured maximum of mobsters.
    #[error("The session is full ({max} mobsters)")]
    MobsterCapacityExceeded { max: usize },
}

impl RegistryError {
    /// Returns the signaling `ErrorCode` value for this error.
    #[must_use]
    pub fn error_code(&self) -> i32 {
        match self {
            RegistryError::MissingSessionName | RegistryError::MissingMobsterName => 1, // INVALID_REQUEST
            RegistryError::SessionNotFound => 4, // NOT_FOUND
            RegistryError::DuplicateSessionName | RegistryError::DuplicateParticipant => 5, // CONFLICT
            RegistryError::SessionCapacityExceeded { .. }
            | RegistryError::MobsterCapacityExceeded { .. } => 7, // CAPACITY_EXCEEDED
        }
    }

    /// True for errors caused by a missing caller input.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            RegistryError::MissingSessionName | RegistryError::MissingMobsterName
        )
    }
}

/// Result type alias using `RegistryError`
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        // Missing input -> 1
        assert_eq!(RegistryError::MissingSessionName.error_code(), 1);
        assert_eq!(RegistryError::MissingMobsterName.error_code(), 1);

        // Not found -> 4
        assert_eq!(RegistryError::SessionNotFound.error_code(), 4);

        // Conflict -> 5
        assert_eq!(RegistryError::DuplicateSessionName.error_code(), 5);
        assert_eq!(RegistryError::DuplicateParticipant.error_code(), 5);

        // Capacity exceeded -> 7
        assert_eq!(
            RegistryError::SessionCapacityExceeded { max: 3 }.error_code(),
            7
        );
        assert_eq!(
            RegistryError::MobsterCapacityExceeded { max: 8 }.error_code(),
            7
        );
    }

    #[test]
    fn test_display_messages_are_stable() {
        assert_eq!(
            RegistryError::MissingSessionName.to_string(),
            "You must provide a session name"
        );
        assert_eq!(
            RegistryError::DuplicateSessionName.to_string(),
            "You must provide a different session name"
        );
        assert_eq!(
            RegistryError::MissingMobsterName.to_string(),
            "You must provide your name"
        );
        assert_eq!(
            RegistryError::SessionNotFound.to_string(),
            "You must provide the name of a current session"
        );
        assert_eq!(
            RegistryError::DuplicateParticipant.to_string(),
            "You may not join the same session twice"
        );
    }

    #[test]
    fn test_capacity_messages_include_limit() {
        assert_eq!(
            format!("{}", RegistryError::SessionCapacityExceeded { max: 2 }),
            "The maximum of 2 sessions has been reached"
        );
        assert_eq!(
            format!("{}", RegistryError::MobsterCapacityExceeded { max: 5 }),
            "The session is full (5 mobsters)"
        );
    }

    #[test]
    fn test_is_missing_input() {
        assert!(RegistryError::MissingSessionName.is_missing_input());
        assert!(RegistryError::MissingMobsterName.is_missing_input());
        assert!(!RegistryError::SessionNotFound.is_missing_input());
        assert!(!RegistryError::DuplicateParticipant.is_missing_input());
    }
}
