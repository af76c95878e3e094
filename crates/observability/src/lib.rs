//! Tracing/logging setup shared by binaries and test harnesses.

/// Tracing subscriber configuration (filters, formatting).
pub mod tracing;

pub use crate::tracing::{DEFAULT_FILTER, init, init_for_tests};
