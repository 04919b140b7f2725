use crate::{GeoPoint, RequestKind, RequestStatus, Severity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Citizen call for help (food, medicine, shelter, rescue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AidRequest {
    pub id: String,
    pub citizen_id: String,
    pub kind: RequestKind,
    pub description: String,
    pub location: GeoPoint,
    pub status: RequestStatus,
    pub priority: Severity,
    pub timestamp: DateTime<Utc>,
    /// Organization id once dispatched.
    pub assigned_to: Option<String>,
}

impl AidRequest {
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            RequestStatus::Pending | RequestStatus::InProgress
        )
    }
}
