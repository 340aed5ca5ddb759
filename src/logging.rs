//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! result line of a run.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback_filter` (from settings) is used.
pub fn init_logging(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
