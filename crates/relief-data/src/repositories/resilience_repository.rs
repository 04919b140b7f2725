use relief_core::ResilienceRecord;

pub struct ResilienceRepository {
    records: Vec<ResilienceRecord>,
}

impl ResilienceRepository {
    pub fn new(records: Vec<ResilienceRecord>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[ResilienceRecord] {
        &self.records
    }

    /// Regions whose training coverage falls under the given percent.
    pub fn under_covered(&self, threshold: u32) -> Vec<&ResilienceRecord> {
        self.records
            .iter()
            .filter(|r| r.is_under_covered(threshold))
            .collect()
    }
}
