use crate::{AlertKind, Severity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broadcast notice shown on the citizen and admin dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub ai_predicted: bool,
}

impl Alert {
    pub fn is_urgent(&self) -> bool {
        self.kind.is_urgent()
    }
}
