use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account role stored on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "&'static str")]
pub enum Role {
    #[default]
    User,
    Admin,
    Vet,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Vet => "vet",
        }
    }

    /// Lenient read-side parse. Older local records used "customer" and
    /// mixed casing; anything that is not admin or vet is a plain user.
    pub fn from_stored(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => Self::Admin,
            "vet" => Self::Vet,
            _ => Self::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        *self == Self::Admin
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "vet" => Ok(Self::Vet),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from_stored(&value)
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.as_str()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
