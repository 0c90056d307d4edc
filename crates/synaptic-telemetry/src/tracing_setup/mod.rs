//! Tracing setup: structured JSON logging and pulse span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use synaptic_core::config::ObservabilityConfig;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SYNAPTIC_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `SYNAPTIC_LOG`, defaulting to `info`. Safe to call more than
/// once; only the first call installs a subscriber.
pub fn init_tracing() {
    init_with_default("info");
}

/// Like [`init_tracing`], with the configured level as the fallback filter.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    init_with_default(&config.log_level);
}

fn init_with_default(default_filter: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}
