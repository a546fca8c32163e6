//! Mob Session Registry Library
//!
//! Tracks ad-hoc mob programming sessions: named groups that mobsters
//! create and join. All state lives in memory for the lifetime of the
//! registry value.
//!
//! # Invariants
//!
//! - Session names are non-empty and unique (exact, case-sensitive)
//! - A mobster appears at most once per session
//! - Sessions and mobsters only accumulate; nothing is removed or renamed
//! - A rejected operation leaves the registry unchanged
//!
//! # Modules
//!
//! - [`registry`] - The owned, single-threaded [`SessionRegistry`]
//! - [`shared`] - Lock-guarded handle for concurrent callers
//! - [`session`] - A single session and its mobsters
//! - [`config`] - Capacity limits loaded from environment
//! - [`errors`] - Error types with stable, user-facing messages
//!
//! # Example
//!
//! ```
//! use mob_registry::{RegistryError, SessionRegistry};
//!
//! let mut registry = SessionRegistry::new();
//! registry.create_session("kata").unwrap();
//! registry.join_session("kata", "Bob").unwrap();
//! registry.join_session("kata", "Amy").unwrap();
//!
//! assert_eq!(registry.active_mobsters("kata"), ["Bob", "Amy"]);
//! assert_eq!(
//!     registry.join_session(None, None),
//!     Err(RegistryError::MissingSessionName)
//! );
//! ```

#![warn(clippy::pedantic)]

pub mod config;
pub mod errors;
pub mod registry;
pub mod session;
pub mod shared;

pub use config::{ConfigError, RegistryConfig};
pub use errors::{RegistryError, Result};
pub use registry::SessionRegistry;
pub use session::Session;
pub use shared::{RegistrySnapshot, SharedSessionRegistry};
