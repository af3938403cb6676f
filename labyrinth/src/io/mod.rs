//! I/O helpers for the labyrinth binaries.

pub mod config;
