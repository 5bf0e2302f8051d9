use vb_core::CoreError;

use error_location::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Remote error on {table}: {message} (status: {status}, code: {code}) {location}")]
    Api {
        table: String,
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response from {table}: {message} {location}")]
    UnexpectedResponse {
        table: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Local store I/O error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid collection key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("{operation} is not supported by the {backend} backend {location}")]
    Unsupported {
        operation: &'static str,
        backend: &'static str,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: vb_config::ConfigError,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn api(table: &str, status: u16, code: String, message: String) -> Self {
        Self::Api {
            table: table.to_string(),
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_response<S: Into<String>>(table: &str, message: S) -> Self {
        Self::UnexpectedResponse {
            table: table.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_key(key: &str) -> Self {
        Self::InvalidKey {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unsupported(operation: &'static str, backend: &'static str) -> Self {
        Self::Unsupported {
            operation,
            backend,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Network-level failures worth retrying from the UI.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for DbError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            message: source.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<vb_config::ConfigError> for DbError {
    #[track_caller]
    fn from(source: vb_config::ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
