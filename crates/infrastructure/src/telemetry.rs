//! Tracing setup for host shells and examples

use tracing_subscriber::EnvFilter;

/// Initialize a formatted tracing subscriber
///
/// Filter directives come from `RUST_LOG`; defaults to `info` when unset.
/// Safe to call more than once: later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
