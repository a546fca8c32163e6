//! # Mob Test Utilities
//!
//! Shared test utilities for the mob session registry.
//!
//! This crate provides:
//! - Fixed test names (sessions and mobsters)
//! - Fixture builders (`TestSession`, `seeded_registry`)
//! - Custom assertions (`RegistryAssertions` trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mob_test_utils::*;
//!
//! #[test]
//! fn test_example() {
//!     let registry = seeded_registry(&[
//!         TestSession::new(TEST_SESSION_KATA).with_mobsters([TEST_MOBSTER_ALICE]),
//!     ]);
//!
//!     registry
//!         .assert_sessions(&[TEST_SESSION_KATA])
//!         .assert_mobsters(TEST_SESSION_KATA, &[TEST_MOBSTER_ALICE]);
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod test_names;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;
pub use test_names::*;
