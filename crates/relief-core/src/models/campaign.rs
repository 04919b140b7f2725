//! Fundraising campaign - the unit donors give against and admins approve.

use crate::{CampaignStatus, Phase, Severity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub phase: Phase,
    pub target_amount: u64,
    pub raised_amount: u64,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    /// Set by an admin; unapproved campaigns sit in the approval queue.
    pub approved: bool,
    pub category: String,
    pub urgency: Severity,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    pub fn is_pending_approval(&self) -> bool {
        !self.approved
    }

    /// Fraction of the target raised, in [0.0, 1.0]. Zero-target campaigns
    /// report 0.0 rather than dividing by zero.
    pub fn progress(&self) -> f64 {
        if self.target_amount == 0 {
            return 0.0;
        }
        (self.raised_amount as f64 / self.target_amount as f64).min(1.0)
    }
}
