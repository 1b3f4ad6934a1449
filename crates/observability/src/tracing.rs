//! Tracing/logging initialization.
//!
//! Emits JSON lines with timestamps. The filter is taken from `RUST_LOG`,
//! falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing for the process using `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initialize tracing with an explicit filter directive, ignoring `RUST_LOG`.
///
/// Returns `false` if the directive does not parse; nothing is installed then.
pub fn init_with_filter(directive: &str) -> bool {
    match EnvFilter::try_new(directive) {
        Ok(filter) => {
            install(filter);
            true
        }
        Err(_) => false,
    }
}

fn install(filter: EnvFilter) {
    // A second global subscriber is rejected; that is the no-op path.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
