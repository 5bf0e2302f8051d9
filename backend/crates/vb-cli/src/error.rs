use vb_auth::AuthFailure;
use vb_config::ConfigError;
use vb_core::CoreError;
use vb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Auth(#[from] AuthFailure),

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// The command needs an acting user and none was given.
    #[error("No user: pass --user-id, or --email and --password {location}")]
    NoActor { location: ErrorLocation },

    #[error("Forbidden: {action} requires an admin {location}")]
    Forbidden {
        action: &'static str,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn no_actor() -> Self {
        Self::NoActor {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(action: &'static str) -> Self {
        Self::Forbidden {
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What to print on stderr. Auth failures use their user-facing text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(failure) => failure.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
