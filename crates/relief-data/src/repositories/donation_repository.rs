use relief_core::Donation;

pub struct DonationRepository {
    donations: Vec<Donation>,
}

impl DonationRepository {
    pub fn new(donations: Vec<Donation>) -> Self {
        Self { donations }
    }

    pub fn all(&self) -> &[Donation] {
        &self.donations
    }

    pub fn by_donor(&self, donor_id: &str) -> Vec<&Donation> {
        self.donations
            .iter()
            .filter(|d| d.donor_id == donor_id)
            .collect()
    }

    pub fn by_campaign(&self, campaign_id: &str) -> Vec<&Donation> {
        self.donations
            .iter()
            .filter(|d| d.campaign_id == campaign_id)
            .collect()
    }

    pub fn total_amount(&self) -> u64 {
        self.donations.iter().map(|d| d.amount).sum()
    }

    pub fn total_amount_for(&self, donor_id: &str) -> u64 {
        self.by_donor(donor_id).iter().map(|d| d.amount).sum()
    }

    /// Beneficiaries reached across a donor's proven donations.
    pub fn beneficiaries_for(&self, donor_id: &str) -> u32 {
        self.by_donor(donor_id)
            .iter()
            .map(|d| d.beneficiaries())
            .sum()
    }

    pub fn proven_count_for(&self, donor_id: &str) -> usize {
        self.by_donor(donor_id)
            .iter()
            .filter(|d| d.has_impact_proof())
            .count()
    }
}
