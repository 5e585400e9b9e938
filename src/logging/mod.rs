mod init;

pub use init::{init_logging, parse_rotation};

use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "item-daemon.log";

/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl LogConfig {
    /// Full path of the active log file.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }
}

/// Default log directory (`~/.item-daemon/logs`).
#[must_use]
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".item-daemon")
        .join("logs")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
