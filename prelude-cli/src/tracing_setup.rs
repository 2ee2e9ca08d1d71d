//! Tracing setup: human-readable or JSON logs on stderr.

use prelude_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// Respects the `PRELUDE_LOG` environment variable for filtering and falls
/// back to the configured log level.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("PRELUDE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
