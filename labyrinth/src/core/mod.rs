//! Deterministic maze logic shared by the server and the solver.
//!
//! Core modules must be free of I/O side effects. Randomness is always
//! injected by the caller, so a seeded generator gives reproducible output.

pub mod generator;
pub mod grid;
pub mod invariants;
pub mod maze;
pub mod render;
pub mod scoreboard;
pub mod session;
pub mod types;
