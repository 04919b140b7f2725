use serde::{Deserialize, Serialize};

/// Per-region preparedness metrics. Percent fields are 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResilienceRecord {
    pub location: String,
    pub score: u32,
    pub training_coverage: u32,
    pub readiness_score: u32,
    pub vulnerability_index: u32,
    pub population: u32,
    pub trained_population: u32,
}

impl ResilienceRecord {
    /// Regions under this coverage threshold are flagged on the admin view.
    pub fn is_under_covered(&self, threshold: u32) -> bool {
        self.training_coverage < threshold
    }
}
