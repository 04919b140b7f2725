//! Registered-user repository.
//!
//! Owns all reads and writes to user records. Seeded once at process start
//! and appended to by signup; there is no update or delete path, so a stale
//! reference can only come from a persisted session that outlived the
//! process (handled by the session store on restore).

use crate::{DataError, Result as DataResult};

use log::debug;
use relief_core::User;

pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(seed: Vec<User>) -> Self {
        Self { users: seed }
    }

    /// Exact-string email lookup. No case folding.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Appends a new user. Email must be novel.
    pub fn insert(&mut self, user: User) -> DataResult<()> {
        if self.find_by_email(&user.email).is_some() {
            return Err(DataError::duplicate_email(&user.email));
        }
        debug!("registered user {} ({})", user.id, user.role);
        self.users.push(user);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }
}
