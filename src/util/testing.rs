//! Test-only tracing setup, shared by unit and integration tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route logs into the test harness output. `RUST_LOG` overrides the
/// default `patternbook=debug` filter. Safe to call from every test binary.
pub fn init_test_setup() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("patternbook=debug"));
        // Another subscriber may already be installed by the harness; keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_calls_when_initializing_then_is_idempotent() {
        init_test_setup();
        init_test_setup();
        tracing::debug!("still logging");
    }
}
