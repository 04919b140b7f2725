use relief_core::CredentialEntry;

/// Fixed table of login secrets, loaded once at process start and never
/// mutated. Signup does not add entries here: a signed-up account is
/// authenticated by its session, not re-login (mirrors the seed contract).
pub struct CredentialDirectory {
    entries: Vec<CredentialEntry>,
}

impl CredentialDirectory {
    pub fn new(entries: Vec<CredentialEntry>) -> Self {
        Self { entries }
    }

    /// Exact-string email lookup.
    pub fn find_by_email(&self, email: &str) -> Option<&CredentialEntry> {
        self.entries.iter().find(|e| e.email == email)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
