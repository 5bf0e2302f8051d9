use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REMOTE_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Hosted row store and auth service. Both `url` and `anon_key` must be set
/// for the remote backend to be used.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            request_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    /// `(url, anon_key)` when both are present and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let key = self
            .anon_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some((url, key))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::remote(format!(
                "remote.url must start with http:// or https://, got {url}"
            )));
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ConfigError::remote(format!(
                "remote.request_timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }
}
