use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid severity: {value} {location}")]
    InvalidSeverity {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid phase: {value} {location}")]
    InvalidPhase {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid disaster status: {value} {location}")]
    InvalidDisasterStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid training status: {value} {location}")]
    InvalidTrainingStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid campaign status: {value} {location}")]
    InvalidCampaignStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid alert kind: {value} {location}")]
    InvalidAlertKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid request kind: {value} {location}")]
    InvalidRequestKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid request status: {value} {location}")]
    InvalidRequestStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
