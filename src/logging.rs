use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "TOURDESK_LOG";

/// Install the stderr diagnostics layer. `default_level` comes from the
/// config file and is used when `TOURDESK_LOG` is unset.
/// Calling it twice is harmless: the second registration is ignored.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
