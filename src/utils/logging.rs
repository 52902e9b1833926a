//! Diagnostic logging setup.
//!
//! User-facing output goes through `ui::messages`; this only wires the
//! `tracing` events emitted by the calculator to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives (EnvFilter syntax).
pub const LOG_ENV: &str = "TIMETOWIN_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
