mod session_store;

use crate::SessionStore;

use std::path::Path;

use relief_data::{CredentialDirectory, UserDirectory, seed};

/// Session store over the seed directories, persisting under `dir`.
pub(crate) fn seeded_store(dir: &Path) -> SessionStore {
    SessionStore::new(
        UserDirectory::new(seed::users()),
        CredentialDirectory::new(seed::credentials()),
        dir.join("session.json"),
    )
}
