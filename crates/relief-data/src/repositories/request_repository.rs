use relief_core::{AidRequest, RequestStatus};

pub struct RequestRepository {
    requests: Vec<AidRequest>,
}

impl RequestRepository {
    pub fn new(requests: Vec<AidRequest>) -> Self {
        Self { requests }
    }

    pub fn all(&self) -> &[AidRequest] {
        &self.requests
    }

    pub fn by_status(&self, status: RequestStatus) -> Vec<&AidRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == status)
            .collect()
    }

    pub fn by_citizen(&self, citizen_id: &str) -> Vec<&AidRequest> {
        self.requests
            .iter()
            .filter(|r| r.citizen_id == citizen_id)
            .collect()
    }

    pub fn open_for_citizen(&self, citizen_id: &str) -> Vec<&AidRequest> {
        self.requests
            .iter()
            .filter(|r| r.citizen_id == citizen_id && r.is_open())
            .collect()
    }
}
