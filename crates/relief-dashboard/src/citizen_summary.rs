use relief_core::TrainingStatus;
use relief_data::{AlertRepository, RequestRepository, TrainingRepository};

use serde::Serialize;

/// What a citizen sees first: nearby help and their own open requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitizenSummary {
    pub upcoming_trainings: usize,
    /// Danger and warning alerts.
    pub active_alerts: usize,
    pub open_requests: usize,
}

impl CitizenSummary {
    pub fn compute(
        citizen_id: &str,
        trainings: &TrainingRepository,
        alerts: &AlertRepository,
        requests: &RequestRepository,
    ) -> Self {
        Self {
            upcoming_trainings: trainings.by_status(TrainingStatus::Upcoming).len(),
            active_alerts: alerts.urgent().len(),
            open_requests: requests.open_for_citizen(citizen_id).len(),
        }
    }
}
