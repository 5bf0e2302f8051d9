use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Appointment lifecycle status.
///
/// Raw values from either backend are folded through [`AppointmentStatus::normalize`]
/// when a row is decoded, so everything past the data-model boundary compares
/// variants instead of strings. Values outside the known set are kept verbatim
/// in `Unrecognized` so a read-then-write does not lose them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Pending,
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Unrecognized(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Case-insensitive, whitespace-tolerant mapping onto the closed set.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Self::Pending,
            "scheduled" => Self::Scheduled,
            "confirmed" => Self::Confirmed,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    /// Completed and cancelled appointments never show up as upcoming.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    /// Strict parse for caller-supplied input: unknown values are rejected
    /// rather than stored as `Unrecognized`.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match Self::normalize(s) {
            Self::Unrecognized(_) => Err(CoreError::InvalidAppointmentStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            status => Ok(status),
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
