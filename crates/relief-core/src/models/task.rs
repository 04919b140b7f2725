use crate::{Phase, Severity, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// NGO field task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub phase: Phase,
    /// Organization id the task is assigned to.
    pub assigned_to: String,
    pub priority: Severity,
    pub status: TaskStatus,
    pub due_date: DateTime<Utc>,
    pub location: String,
    pub ai_generated: bool,
}

impl Task {
    pub fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::Pending | TaskStatus::InProgress)
    }
}
