use crate::{ConfigError, ConfigErrorResult, LogLevel, LoggingConfig, StorageConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with env overrides.
    ///
    /// Loading order:
    /// 1. Check for RELIEF_STATE_DIR env var, else use ./.relief/
    /// 2. Auto-create the state directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RELIEF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let state_dir = Self::state_dir()?;

        if !state_dir.exists() {
            std::fs::create_dir_all(&state_dir).map_err(|e| ConfigError::Io {
                path: state_dir.clone(),
                source: e,
            })?;
        }

        let config_path = state_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the state directory.
    /// Priority: RELIEF_STATE_DIR env var > ./.relief/ (relative to cwd)
    pub fn state_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("RELIEF_STATE_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".relief"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(file) = std::env::var("RELIEF_SESSION_FILE") {
            self.storage.session_file = file;
        }
        if let Ok(level) = std::env::var("RELIEF_LOG_LEVEL") {
            self.logging.level = LogLevel::parse(&level);
        }
    }

    /// Validate all configuration. Call after load() to catch errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage.session_file.is_empty() {
            return Err(ConfigError::storage("storage.session_file must not be empty"));
        }

        // The session file must stay inside the state directory
        let path = std::path::Path::new(&self.storage.session_file);
        if path.is_absolute() || self.storage.session_file.contains("..") {
            return Err(ConfigError::storage(
                "storage.session_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to the session file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        let state_dir = Self::state_dir()?;
        Ok(state_dir.join(&self.storage.session_file))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  session file: {}", self.storage.session_file);
        info!("  log level: {}", *self.logging.level);
    }
}
