use std::ops::Deref;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Log level as written in `config.toml` or `RELIEF_LOG_LEVEL`.
///
/// Parsing never fails: a value that names no level falls back to `info`,
/// so a typo in the config cannot prevent startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    /// Case-insensitive parse with the `info` fallback.
    pub fn parse(s: &str) -> Self {
        let filter = match s.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => crate::DEFAULT_LOG_LEVEL,
        };
        Self(filter)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(crate::DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::parse(&String::deserialize(deserializer)?))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
