//! Tracing/logging setup shared by storefront binaries.

use serde::{Deserialize, Serialize};

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Logging configuration as read from the application config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g. `info`,
    /// `storefront_catalog=debug`).
    pub level: String,
    /// JSON lines when true, human-readable output otherwise.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    tracing::init(config);
}
