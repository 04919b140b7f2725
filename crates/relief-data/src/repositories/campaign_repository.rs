use relief_core::Campaign;

pub struct CampaignRepository {
    campaigns: Vec<Campaign>,
}

impl CampaignRepository {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self { campaigns }
    }

    pub fn all(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn active(&self) -> Vec<&Campaign> {
        self.campaigns.iter().filter(|c| c.is_active()).collect()
    }

    /// Approval queue for the admin view.
    pub fn pending_approval(&self) -> Vec<&Campaign> {
        self.campaigns
            .iter()
            .filter(|c| c.is_pending_approval())
            .collect()
    }

    /// Approved and currently running.
    pub fn approved_active(&self) -> Vec<&Campaign> {
        self.campaigns
            .iter()
            .filter(|c| c.approved && c.is_active())
            .collect()
    }

    pub fn total_raised(&self) -> u64 {
        self.campaigns.iter().map(|c| c.raised_amount).sum()
    }

    pub fn total_target(&self) -> u64 {
        self.campaigns.iter().map(|c| c.target_amount).sum()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }
}
