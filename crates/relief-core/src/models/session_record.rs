use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted session reference stored in the client-local session file.
///
/// Only an opaque reference is written to disk; the full user record is
/// resolved against the user directory on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: Uuid,
    pub user_id: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    pub schema_version: i32,
}

pub const SESSION_SCHEMA_VERSION: i32 = 1;

impl SessionRecord {
    pub fn new(user_id: String, user_email: String) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user_id,
            user_email,
            created_at: Utc::now(),
            schema_version: SESSION_SCHEMA_VERSION,
        }
    }
}
