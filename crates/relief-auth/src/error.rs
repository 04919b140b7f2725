use crate::session_file::error::SessionFileError;

use std::panic::Location;

use error_location::ErrorLocation;
use relief_data::DataError;
use thiserror::Error;

/// Authentication failures, tagged by cause. The four auth variants replace
/// the collapsed boolean the UI historically surfaced; callers that still
/// want a generic message can match on the whole enum.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No account registered for {email} {location}")]
    UnknownEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Wrong password for {email} {location}")]
    BadPassword {
        email: String,
        location: ErrorLocation,
    },

    #[error("Supplementary identifier does not match for {email} {location}")]
    BadSupplementaryId {
        email: String,
        location: ErrorLocation,
    },

    #[error("An account with email {email} already exists {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Session file error: {source} {location}")]
    SessionFile {
        #[source]
        source: SessionFileError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn unknown_email(email: impl Into<String>) -> Self {
        Self::UnknownEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_password(email: impl Into<String>) -> Self {
        Self::BadPassword {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_supplementary_id(email: impl Into<String>) -> Self {
        Self::BadSupplementaryId {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the failure is an authentication outcome (as opposed to a
    /// storage-layer problem). UI callers show a generic message for these.
    pub fn is_authentication_failure(&self) -> bool {
        !matches!(self, Self::SessionFile { .. })
    }
}

impl From<SessionFileError> for AuthError {
    #[track_caller]
    fn from(source: SessionFileError) -> Self {
        Self::SessionFile {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DataError> for AuthError {
    #[track_caller]
    fn from(source: DataError) -> Self {
        match source {
            DataError::DuplicateEmail { email, .. } => Self::DuplicateEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
