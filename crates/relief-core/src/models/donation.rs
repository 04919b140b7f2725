use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single gift against a campaign. The transaction hash is a display
/// label carried over from the ledger UI; no chain integration exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub campaign_id: String,
    pub donor_id: String,
    /// Whole currency units.
    pub amount: u64,
    pub date: DateTime<Utc>,
    pub transaction_hash: String,
    pub impact_proof: Option<ImpactProof>,
}

impl Donation {
    pub fn has_impact_proof(&self) -> bool {
        self.impact_proof.is_some()
    }

    pub fn beneficiaries(&self) -> u32 {
        self.impact_proof.as_ref().map_or(0, |p| p.beneficiaries)
    }
}

/// Evidence attached once a donation has been put to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactProof {
    pub photos: Vec<String>,
    pub description: String,
    pub beneficiaries: u32,
}
