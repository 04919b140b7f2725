use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Food,
    Medicine,
    Shelter,
    Rescue,
    Other,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Medicine => "medicine",
            Self::Shelter => "shelter",
            Self::Rescue => "rescue",
            Self::Other => "other",
        }
    }
}

impl FromStr for RequestKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "food" => Ok(Self::Food),
            "medicine" => Ok(Self::Medicine),
            "shelter" => Ok(Self::Shelter),
            "rescue" => Ok(Self::Rescue),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidRequestKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
