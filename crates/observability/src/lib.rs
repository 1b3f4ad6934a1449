//! Process-wide logging setup for stockroom consumers and test binaries.

/// Tracing subscriber configuration.
pub mod tracing;

pub use crate::tracing::{DEFAULT_FILTER, init, init_with_filter};
