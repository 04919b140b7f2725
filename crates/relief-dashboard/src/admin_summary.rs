use crate::LOW_COVERAGE_THRESHOLD;

use relief_data::{
    CampaignRepository, DisasterRepository, RequestRepository, ResilienceRepository,
    TrainingRepository,
};

use relief_core::RequestStatus;
use serde::Serialize;

/// Headline counters for the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSummary {
    pub active_disasters: usize,
    pub scheduled_trainings: usize,
    pub active_campaigns: usize,
    pub pending_requests: usize,
    /// Regions whose training coverage falls under the threshold.
    pub low_coverage_regions: Vec<String>,
}

impl AdminSummary {
    pub fn compute(
        disasters: &DisasterRepository,
        trainings: &TrainingRepository,
        campaigns: &CampaignRepository,
        requests: &RequestRepository,
        resilience: &ResilienceRepository,
    ) -> Self {
        Self {
            active_disasters: disasters.active().len(),
            scheduled_trainings: trainings.scheduled().len(),
            active_campaigns: campaigns.active().len(),
            pending_requests: requests.by_status(RequestStatus::Pending).len(),
            low_coverage_regions: resilience
                .under_covered(LOW_COVERAGE_THRESHOLD)
                .iter()
                .map(|r| r.location.clone())
                .collect(),
        }
    }
}
