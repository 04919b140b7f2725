use relief_core::SessionRecord;

use serde::Serialize;

/// Result of loading the session file - distinguishes "absent" from errors.
#[derive(Debug, Serialize)]
pub struct LoadResult {
    pub record: Option<SessionRecord>,
    /// Present if the file exists but could not be parsed.
    pub corruption_error: Option<String>,
}
