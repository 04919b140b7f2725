use crate::DEFAULT_SESSION_FILENAME;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Session file name, relative to the state directory.
    pub session_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: String::from(DEFAULT_SESSION_FILENAME),
        }
    }
}
