//! Diagnostics setup shared by both binaries.
//!
//! Events go to stderr so stdout stays the copy-pasteable command output.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "CRUNCH_LOG";

/// Filter from `CRUNCH_LOG`, falling back to `warn` (or `debug` when verbose)
pub fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter(verbose)),
        )
        .init();
}
