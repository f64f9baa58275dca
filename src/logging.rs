//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `routerbits=debug`).
pub const LOG_ENV: &str = "ROUTERBITS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from [`LOG_ENV`], falling back to `warn` when unset or invalid.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber, logging to stderr.
///
/// Later calls are ignored, so tests and the binary can both call this.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
