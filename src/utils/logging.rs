/// Diagnostic logging via `tracing`
///
/// User-facing progress stays on stdout; diagnostics go to stderr and are
/// filtered by `RUST_LOG`, falling back to the configured level.
use tracing_subscriber::{EnvFilter, fmt};

/// Build the filter: `RUST_LOG` wins, otherwise `default_level`
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the global subscriber. Safe to call more than once.
pub fn init_logging(default_level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
