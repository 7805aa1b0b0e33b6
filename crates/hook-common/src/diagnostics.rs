//! Diagnostic logging for hooks.
//!
//! Everything goes to stderr: stdout is reserved for the host protocol, and
//! the host ignores stderr entirely, so failures can be reported here without
//! ever becoming user-visible.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the diagnostic filter (default `warn`).
pub const LOG_FILTER_VAR: &str = "MEM0_HOOK_LOG";

/// Install the stderr tracing subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
