//! Log output for the CLI
//!
//! Logs go to stderr so the report can be piped from stdout. `RUST_LOG`
//! overrides the level chosen with `-q`/`-v`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Build the filter for `verbosity`, preferring `RUST_LOG` when it is set.
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
