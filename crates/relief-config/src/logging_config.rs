use crate::LogLevel;

use serde::Deserialize;

/// Logging section of `config.toml`. Only the level is configurable here;
/// installing a logger is left to the consuming application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
