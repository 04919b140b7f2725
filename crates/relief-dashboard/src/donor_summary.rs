use relief_data::DonationRepository;

use serde::Serialize;

/// Giving history rollup for one donor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonorSummary {
    pub donation_count: usize,
    /// Whole currency units.
    pub total_donated: u64,
    pub beneficiaries_reached: u32,
    /// Donations carrying an impact proof.
    pub proven_donations: usize,
}

impl DonorSummary {
    pub fn compute(donor_id: &str, donations: &DonationRepository) -> Self {
        Self {
            donation_count: donations.by_donor(donor_id).len(),
            total_donated: donations.total_amount_for(donor_id),
            beneficiaries_reached: donations.beneficiaries_for(donor_id),
            proven_donations: donations.proven_count_for(donor_id),
        }
    }
}
