use relief_core::{SessionRecord, User};

/// The single active session: the authenticated user plus the record
/// mirrored to the session file.
#[derive(Debug, Clone)]
pub struct Session {
    pub record: SessionRecord,
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        let record = SessionRecord::new(user.id.clone(), user.email.clone());
        Self { record, user }
    }
}
