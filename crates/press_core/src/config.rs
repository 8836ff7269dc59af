//! Runtime configuration for the core crate.
//!
//! Only logging is configurable; validation bounds are fixed constants in
//! `model::validation`.

use std::path::PathBuf;

const DEFAULT_LOG_DIR_NAME: &str = "press_core-logs";

/// File logging settings consumed by `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error` (case-insensitive).
    pub level: String,
    /// Absolute directory receiving rolling log files.
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }
}

impl Default for LoggingConfig {
    /// Build-mode default level, logs under the system temp directory.
    fn default() -> Self {
        Self::new(
            default_log_level(),
            std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        )
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
