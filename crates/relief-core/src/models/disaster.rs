use crate::{DisasterStatus, GeoPoint, Severity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked disaster event, predicted or in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    pub id: String,
    pub name: String,
    /// Free-form classification (e.g., "flood", "earthquake").
    pub kind: String,
    pub severity: Severity,
    pub location: GeoPoint,
    pub status: DisasterStatus,
    pub start_date: DateTime<Utc>,
    pub affected_population: u32,
    /// Model-produced score in [0.0, 100.0].
    pub risk_score: f32,
}

impl Disaster {
    pub fn is_active(&self) -> bool {
        self.status == DisasterStatus::Active
    }
}
