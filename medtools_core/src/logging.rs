//! Tracing setup for the `medtools` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact stderr subscriber; RUST_LOG overrides `default_level`.
///
/// Stdout is reserved for rendered results, so `--json` output stays
/// parseable with logging enabled. Calling this twice is harmless.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
