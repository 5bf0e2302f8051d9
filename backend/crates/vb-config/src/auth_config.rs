use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
    DEFAULT_LOGIN_TIMEOUT_SECS, DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_SIGNUP_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub login_timeout_secs: u64,
    pub signup_timeout_secs: u64,
    /// Logout, reset request and password update.
    pub request_timeout_secs: u64,
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_timeout_secs: DEFAULT_LOGIN_TIMEOUT_SECS,
            signup_timeout_secs: DEFAULT_SIGNUP_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl AuthConfig {
    pub fn login_timeout(&self) -> Duration {
        Duration::from_secs(self.login_timeout_secs)
    }

    pub fn signup_timeout(&self) -> Duration {
        Duration::from_secs(self.signup_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("auth.login_timeout_secs", self.login_timeout_secs),
            ("auth.signup_timeout_secs", self.signup_timeout_secs),
            ("auth.request_timeout_secs", self.request_timeout_secs),
        ] {
            if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&value) {
                return Err(ConfigError::auth(format!(
                    "{name} must be {MIN_TIMEOUT_SECS}-{MAX_TIMEOUT_SECS}, got {value}"
                )));
            }
        }

        if self.min_password_length == 0 {
            return Err(ConfigError::auth("auth.min_password_length must be at least 1"));
        }

        Ok(())
    }
}
