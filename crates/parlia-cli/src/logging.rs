//! Log output for the command line.
//!
//! Library crates log through the `log` facade; the fmt subscriber's
//! `tracing-log` bridge picks those records up. Output goes to stderr so
//! JSON and SVG on stdout stay clean.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides `default_level`.
/// Calling this twice is harmless.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
