use serde::{Deserialize, Serialize};

/// Static authentication secret for a seeded account.
/// Admin/NGO entries carry a supplementary identifier that must be
/// presented at login; donor/citizen entries carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialEntry {
    pub email: String,
    pub password: String,
    pub supplementary_id: Option<String>,
}

impl CredentialEntry {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            supplementary_id: None,
        }
    }

    pub fn with_supplementary_id(email: &str, password: &str, supplementary_id: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            supplementary_id: Some(supplementary_id.to_string()),
        }
    }

    /// Whether login against this entry must also match a supplementary id.
    pub fn requires_supplementary_id(&self) -> bool {
        self.supplementary_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}
