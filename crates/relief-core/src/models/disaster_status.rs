use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterStatus {
    Predicted,
    Active,
    Recovery,
}

impl DisasterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Predicted => "predicted",
            Self::Active => "active",
            Self::Recovery => "recovery",
        }
    }
}

impl FromStr for DisasterStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "predicted" => Ok(Self::Predicted),
            "active" => Ok(Self::Active),
            "recovery" => Ok(Self::Recovery),
            _ => Err(CoreError::InvalidDisasterStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DisasterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
