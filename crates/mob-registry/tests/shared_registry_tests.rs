//! Tests for concurrent use of the shared registry handle.
//!
//! Threads race on the same session; the single registry lock must keep
//! names unique and every mobster listed exactly once.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::thread;

use mob_registry::{RegistryError, SharedSessionRegistry};
use mob_test_utils::*;

const THREADS: usize = 8;

#[test]
fn test_concurrent_creates_of_one_name_yield_one_session() {
    let registry = SharedSessionRegistry::new();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = registry.clone();
                scope.spawn(move || registry.create_session(TEST_SESSION_KATA))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == RegistryError::DuplicateSessionName));
    registry.assert_sessions(&[TEST_SESSION_KATA]);
}

#[test]
fn test_concurrent_joins_land_exactly_once() {
    let registry = SharedSessionRegistry::new();
    registry.create_session(TEST_SESSION_REFACTOR).unwrap();

    thread::scope(|scope| {
        for i in 0..THREADS {
            let registry = registry.clone();
            scope.spawn(move || {
                let mobster = format!("mobster-{i}");
                registry
                    .join_session(TEST_SESSION_REFACTOR, mobster.as_str())
                    .unwrap();
                // Second attempt from the same thread always collides
                assert_eq!(
                    registry.join_session(TEST_SESSION_REFACTOR, mobster.as_str()),
                    Err(RegistryError::DuplicateParticipant)
                );
            });
        }
    });

    let mut mobsters = registry.active_mobsters(TEST_SESSION_REFACTOR);
    assert_eq!(mobsters.len(), THREADS);
    mobsters.sort();
    mobsters.dedup();
    assert_eq!(mobsters.len(), THREADS);
}

#[test]
fn test_snapshot_serializes_all_sessions() {
    let registry = SharedSessionRegistry::new();
    registry.create_session(TEST_SESSION_KATA).unwrap();
    registry.create_session(TEST_SESSION_SPIKE).unwrap();
    registry
        .join_session(TEST_SESSION_SPIKE, TEST_MOBSTER_ALICE)
        .unwrap();

    let json = serde_json::to_value(registry.snapshot()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "sessions": [
                { "name": TEST_SESSION_KATA, "mobsters": [] },
                { "name": TEST_SESSION_SPIKE, "mobsters": [TEST_MOBSTER_ALICE] },
            ]
        })
    );
}

#[test]
fn test_unknown_session_reads_are_lenient() {
    let registry = SharedSessionRegistry::new();

    assert!(registry.active_mobsters("nonexistent").is_empty());
    assert!(registry.active_mobsters(None).is_empty());
    registry.assert_no_mobsters(&unique_session_name());
}
