//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::LogConfig;

/// Filter from `RUST_LOG` if set, else from the configured level. An
/// unparsable configured level falls back to `info`.
pub fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Logs go to
/// stderr so command output on stdout stays clean.
pub fn init(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if config.json {
        builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
    } else {
        builder.compact().try_init()
    };
}
