//! Development-time tracing for debugging the application.
//!
//! Store diagnostics (lenient-load degradations, save attempts) are emitted
//! through `tracing` and controlled by `RUST_LOG`; they are never part of the
//! user-facing terminal output, which goes through the session's writer.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
