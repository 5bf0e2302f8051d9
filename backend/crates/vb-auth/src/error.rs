use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Expected failure outcomes of the session facade.
///
/// None of these indicate a bug; they are returned, never panicked, and the
/// caller turns them into a user-facing message.
#[derive(Error, Debug)]
pub enum AuthFailure {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("{operation} timed out after {}s {location}", .after.as_secs())]
    TimedOut {
        operation: &'static str,
        after: Duration,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth service rejected the request: {message} (code: {code}) {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// The auth identity exists but its profile row could not be written.
    /// The identity is not rolled back.
    #[error("Account created but profile setup failed: {message} {location}")]
    ProfileCreation {
        user_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication is not configured {location}")]
    NotConfigured { location: ErrorLocation },

    #[error("No active session {location}")]
    NoSession { location: ErrorLocation },

    #[error("Password update rejected: {message} {location}")]
    RecoveryRejected {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthFailure {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timed_out(operation: &'static str, after: Duration) -> Self {
        Self::TimedOut {
            operation,
            after,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(code: String, message: String) -> Self {
        Self::Rejected {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_creation<S: Into<String>>(user_id: String, message: S) -> Self {
        Self::ProfileCreation {
            user_id,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured() -> Self {
        Self::NotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_session() -> Self {
        Self::NoSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn recovery_rejected<S: Into<String>>(message: S) -> Self {
        Self::RecoveryRejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::TimedOut { .. } => "TIMEOUT",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Network { .. } => "NETWORK_ERROR",
            Self::Rejected { .. } => "REJECTED",
            Self::ProfileCreation { .. } => "PROFILE_CREATION_FAILED",
            Self::NotConfigured { .. } => "NOT_CONFIGURED",
            Self::NoSession { .. } => "NO_SESSION",
            Self::RecoveryRejected { .. } => "RECOVERY_REJECTED",
        }
    }

    /// Message safe to show to an end user (no locations, no codes).
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { .. } => "Invalid email or password.".to_string(),
            Self::TimedOut { .. } => {
                "The request timed out. Check your connection and try again.".to_string()
            }
            Self::Validation { message, .. } => message.clone(),
            Self::Network { .. } => "Could not reach the server. Please try again.".to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::ProfileCreation { .. } => {
                "Your account was created but your profile could not be saved. Please contact support."
                    .to_string()
            }
            Self::NotConfigured { .. } => {
                "Sign-in is unavailable: no authentication service is configured.".to_string()
            }
            Self::NoSession { .. } => "Your session has expired. Please sign in again.".to_string(),
            Self::RecoveryRejected { .. } => {
                "This password reset link is invalid or has expired.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for AuthFailure {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.to_string())
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthFailure>;
