//! Fixed names for deterministic tests.

// Session names
pub const TEST_SESSION_KATA: &str = "bowling kata";
pub const TEST_SESSION_REFACTOR: &str = "legacy refactoring";
pub const TEST_SESSION_SPIKE: &str = "parser spike";

// Mobster names
pub const TEST_MOBSTER_ALICE: &str = "Alice";
pub const TEST_MOBSTER_BOB: &str = "Bob";
pub const TEST_MOBSTER_AMY: &str = "Amy";
