//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the application's own targets.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "tabdeck=debug",
            LogLevel::Info => "tabdeck=info",
            LogLevel::Warning => "tabdeck=warn",
            LogLevel::Error => "tabdeck=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
