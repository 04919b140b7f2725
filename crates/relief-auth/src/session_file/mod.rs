//! Client-local session persistence: one JSON file holding the current
//! session record. An absent file means no session.

pub mod error;
pub mod load_result;

use crate::session_file::{
    error::{Result as SessionFileResult, SessionFileError},
    load_result::LoadResult,
};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};
use relief_core::SessionRecord;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Loads the persisted session record.
///
/// Returns:
/// - `Ok(LoadResult { record: Some(...), corruption_error: None })` - loaded
/// - `Ok(LoadResult { record: None, corruption_error: None })` - no file (anonymous)
/// - `Ok(LoadResult { record: None, corruption_error: Some(...) })` - file exists but corrupted
pub fn load(path: &Path) -> SessionFileResult<LoadResult> {
    if !path.exists() {
        info!("No session file at {path:?} (anonymous start)");
        return Ok(LoadResult {
            record: None,
            corruption_error: None,
        });
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| SessionFileError::file_read(path.to_path_buf(), e))?;

    match serde_json::from_str::<SessionRecord>(&contents) {
        Ok(record) => {
            info!(
                "Loaded session {} for user {} (schema v{})",
                record.session_id, record.user_id, record.schema_version
            );
            Ok(LoadResult {
                record: Some(record),
                corruption_error: None,
            })
        }
        Err(e) => {
            warn!("Session file corrupted at {path:?}: {e}");
            Ok(LoadResult {
                record: None,
                corruption_error: Some(e.to_string()),
            })
        }
    }
}

/// Saves the session record using the atomic write pattern.
///
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
///
/// This prevents corruption if the process dies mid-write.
pub fn save(path: &Path, record: &SessionRecord) -> SessionFileResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SessionFileError::dir_creation(parent.to_path_buf(), e))?;
    }

    let temp_path = path.with_extension(format!("tmp.{}", std::process::id()));

    let json = serde_json::to_string_pretty(record)?;

    {
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| SessionFileError::file_write(temp_path.clone(), e))?;

        file.write_all(json.as_bytes())
            .map_err(|e| SessionFileError::file_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| SessionFileError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Clean up temp file on failure
        let _ = fs::remove_file(&temp_path);
        SessionFileError::atomic_rename(temp_path, path.to_path_buf(), e)
    })?;

    info!("Saved session {}", record.session_id);
    Ok(())
}

/// Removes the session file. Safe to call when no file exists.
pub fn remove(path: &Path) -> SessionFileResult<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Removed session file at {path:?}");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SessionFileError::file_remove(path.to_path_buf(), e)),
    }
}

/// Backs up a corrupted session file for debugging.
///
/// Renames the file to `<name>.corrupted.{timestamp}` next to the original.
pub fn backup_corrupted(path: &Path) -> SessionFileResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let backup_path = path.with_extension(format!("corrupted.{timestamp}"));

    fs::rename(path, &backup_path).map_err(|e| SessionFileError::BackupFailed {
        source: e,
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    })?;

    warn!("Backed up corrupted session file to {backup_path:?}");
    Ok(Some(backup_path))
}
