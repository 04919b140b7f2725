use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("A user with email {email} already exists {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },
}

impl DataError {
    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
