//! Diagnostic tracing shared by the server and the solver.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. Product output
//! (the final report line, maze drawings) is printed to stdout separately.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; when unset, uses `default_filter`.
///
/// # Example
/// ```bash
/// RUST_LOG=labyrinth=debug,icarus=debug icarus --offline
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
