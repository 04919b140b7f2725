use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account role - selects which dashboard a user sees and whether login
/// demands a supplementary identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Donor,
    Ngo,
    Citizen,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Donor => "donor",
            Self::Ngo => "ngo",
            Self::Citizen => "citizen",
        }
    }

    /// Three-letter prefix used when generating user ids at signup.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Admin => "ADM",
            Self::Donor => "DON",
            Self::Ngo => "NGO",
            Self::Citizen => "CIT",
        }
    }

    /// Admin and NGO accounts must present a supplementary identifier
    /// at login when their credential entry carries one.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Admin | Self::Ngo)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "donor" => Ok(Self::Donor),
            "ngo" => Ok(Self::Ngo),
            "citizen" => Ok(Self::Citizen),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
