use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Presentation class of an alert. Danger and warning alerts are the
/// ones the citizen dashboard counts as "active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
    Danger,
    Info,
    Success,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Success => "success",
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Warning | Self::Danger)
    }
}

impl FromStr for AlertKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            _ => Err(CoreError::InvalidAlertKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
