//! Stable exit codes for the labyrinth binaries.

/// Every requested attempt found the treasure (or the server shut down cleanly).
pub const OK: i32 = 0;
/// Invalid config, unreachable server, or another fatal error.
pub const INVALID: i32 = 1;
/// At least one attempt ended without finding the treasure.
pub const UNSOLVED: i32 = 2;
