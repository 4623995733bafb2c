//! Development-time tracing for debugging critters.
//!
//! Output goes to stderr so it never mixes with the rendered lines printed on
//! stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Falls back to `default_filter` (usually the
/// configured `log_filter`) if unset or unparsable.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=critters=debug cargo run -- cat Tom --eat 1
/// ```
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
