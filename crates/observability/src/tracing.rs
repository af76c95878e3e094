//! Tracing/logging initialization.
//!
//! The rule engine only emits events through the `tracing` facade; whoever
//! drives it decides where those events go by installing a subscriber here.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize JSON logging for the process, configurable via `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Initialize human-readable logging routed through the libtest capture.
///
/// Falls back to `debug` so day-by-day transitions show up in failing test
/// output without any environment setup.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .with_target(false)
        .try_init();
}
