use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid appointment status: {value} {location}")]
    InvalidAppointmentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid password reset status: {value} {location}")]
    InvalidPasswordResetStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode {entity}: {source} {location}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to encode {entity}: {message} {location}")]
    Encode {
        entity: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(entity: &'static str, source: serde_json::Error) -> Self {
        Self::Decode {
            entity,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode<S: Into<String>>(entity: &'static str, message: S) -> Self {
        Self::Encode {
            entity,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
