use crate::{GeoPoint, Phase, TrainingStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Community preparedness training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub id: String,
    pub title: String,
    pub description: String,
    pub phase: Phase,
    pub location: GeoPoint,
    pub date: DateTime<Utc>,
    /// Human-readable duration (e.g., "3 hours").
    pub duration: String,
    pub capacity: u32,
    pub enrolled: u32,
    pub instructor: String,
    pub status: TrainingStatus,
    pub attendance_code: Option<String>,
}

impl Training {
    /// Upcoming or ongoing - counts toward the "scheduled" dashboards.
    pub fn is_scheduled(&self) -> bool {
        matches!(
            self.status,
            TrainingStatus::Upcoming | TrainingStatus::Ongoing
        )
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled)
    }
}
