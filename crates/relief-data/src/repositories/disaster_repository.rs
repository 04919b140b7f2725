use relief_core::Disaster;

/// Read-only view over the tracked disasters.
pub struct DisasterRepository {
    disasters: Vec<Disaster>,
}

impl DisasterRepository {
    pub fn new(disasters: Vec<Disaster>) -> Self {
        Self { disasters }
    }

    pub fn all(&self) -> &[Disaster] {
        &self.disasters
    }

    pub fn active(&self) -> Vec<&Disaster> {
        self.disasters.iter().filter(|d| d.is_active()).collect()
    }

    /// Leading slice for the overview panel.
    pub fn headline(&self, n: usize) -> &[Disaster] {
        &self.disasters[..self.disasters.len().min(n)]
    }
}
