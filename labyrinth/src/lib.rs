//! Labyrinth generation, exploration and solving.
//!
//! A server ("daedalus") generates rectangular mazes and lets a remote
//! explorer feel its way through them one room at a time; a solver
//! ("icarus") finds the treasure using nothing but the walls of the room it
//! stands in. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (grid, generation, movement
//!   rules, scoring). No I/O; randomness is injected.
//! - **[`io`]**: Side-effecting helpers (configuration files).
//!
//! [`game`], [`protocol`] and [`navigator`] wire the core to the two
//! binaries: the server side answers protocol requests, the solver side
//! drives any [`navigator::Explorer`].

pub mod core;
pub mod exit_codes;
pub mod game;
pub mod io;
pub mod logging;
pub mod navigator;
pub mod protocol;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
