//! The session store: authenticates or registers a caller and owns the
//! single active session.
//!
//! Lifecycle: `{anonymous} -> login/signup -> {authenticated} -> logout ->
//! {anonymous}`. There are no intermediate states.

use crate::{AuthError, Result as AuthResult, Session, SignupRequest, session_file};

use std::path::PathBuf;

use log::{info, warn};
use rand::Rng;
use relief_core::{Role, User};
use relief_data::{CredentialDirectory, UserDirectory};

pub struct SessionStore {
    users: UserDirectory,
    credentials: CredentialDirectory,
    session_path: PathBuf,
    session: Option<Session>,
}

impl SessionStore {
    /// The directories are handed in at construction; the store owns them
    /// for its lifetime. No session is restored here - call [`restore`].
    ///
    /// [`restore`]: SessionStore::restore
    pub fn new(
        users: UserDirectory,
        credentials: CredentialDirectory,
        session_path: PathBuf,
    ) -> Self {
        Self {
            users,
            credentials,
            session_path,
            session: None,
        }
    }

    /// Authenticates against the user and credential directories.
    ///
    /// Exact-string matching throughout: no case folding, no trimming.
    /// Admin/NGO accounts whose credential entry carries a supplementary
    /// identifier must present it.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        supplementary_id: Option<&str>,
    ) -> AuthResult<User> {
        let Some(user) = self.users.find_by_email(email) else {
            return Err(AuthError::unknown_email(email));
        };

        // An account without a credential entry cannot authenticate at all,
        // so it reports the same cause as an unregistered email.
        let Some(entry) = self.credentials.find_by_email(email) else {
            return Err(AuthError::unknown_email(email));
        };

        if entry.password != password {
            return Err(AuthError::bad_password(email));
        }

        if user.role.is_privileged()
            && entry.requires_supplementary_id()
            && supplementary_id != entry.supplementary_id.as_deref()
        {
            return Err(AuthError::bad_supplementary_id(email));
        }

        let user = user.clone();
        self.establish(user.clone())?;
        info!("login: {} ({})", user.email, user.role);
        Ok(user)
    }

    /// Registers a new user and signs them in.
    ///
    /// The generated id is the role prefix plus a random 3-digit suffix;
    /// collisions are not checked (ids are labels, email is the key).
    pub fn signup(&mut self, request: SignupRequest) -> AuthResult<User> {
        let user = User::new(
            generate_user_id(request.role),
            request.name,
            request.email,
            request.phone,
            request.role,
            request.organization_id,
        );

        self.users.insert(user.clone())?;
        self.establish(user.clone())?;
        info!("signup: {} ({})", user.email, user.role);
        Ok(user)
    }

    /// Clears the session and removes the session file. Idempotent.
    pub fn logout(&mut self) -> AuthResult<()> {
        self.session = None;
        session_file::remove(&self.session_path)?;
        Ok(())
    }

    /// Re-establishes a session from the persisted record, resolving the
    /// stored reference against the user directory. A missing file, a
    /// corrupted file (backed up first) or an unresolvable user all leave
    /// the store anonymous.
    ///
    /// Returns whether a session was restored.
    pub fn restore(&mut self) -> AuthResult<bool> {
        let loaded = session_file::load(&self.session_path)?;

        if loaded.corruption_error.is_some() {
            session_file::backup_corrupted(&self.session_path)?;
            return Ok(false);
        }

        let Some(record) = loaded.record else {
            return Ok(false);
        };

        match self.users.find_by_email(&record.user_email) {
            Some(user) => {
                let user = user.clone();
                info!("restored session {} for {}", record.session_id, user.email);
                self.session = Some(Session { record, user });
                Ok(true)
            }
            None => {
                // The directory is memory-only; a session can outlive the
                // user that created it. Treat the record as stale.
                warn!(
                    "session {} references unknown user {}; discarding",
                    record.session_id, record.user_email
                );
                session_file::remove(&self.session_path)?;
                Ok(false)
            }
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Sets the session and mirrors it to the session file.
    fn establish(&mut self, user: User) -> AuthResult<()> {
        let session = Session::new(user);
        session_file::save(&self.session_path, &session.record)?;
        self.session = Some(session);
        Ok(())
    }
}

fn generate_user_id(role: Role) -> String {
    let suffix: u32 = rand::rng().random_range(0..1000);
    format!("{}{suffix:03}", role.id_prefix())
}
