use relief_core::{Alert, Severity};

pub struct AlertRepository {
    alerts: Vec<Alert>,
}

impl AlertRepository {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    /// Danger and warning alerts - what the citizen view counts as active.
    pub fn urgent(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.is_urgent()).collect()
    }

    pub fn at_least(&self, severity: Severity) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| a.severity >= severity)
            .collect()
    }

    pub fn for_location(&self, location: &str) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| a.location == location)
            .collect()
    }
}
