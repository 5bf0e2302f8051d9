use crate::{ConfigError, ConfigErrorResult, DEFAULT_FALLBACK_ORIGIN, DEFAULT_RESET_PATH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public URL of the deployed application.
    pub base_url: Option<String>,
    /// Used for redirect links when `base_url` is unset.
    pub fallback_origin: String,
    pub reset_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            fallback_origin: String::from(DEFAULT_FALLBACK_ORIGIN),
            reset_path: String::from(DEFAULT_RESET_PATH),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("app.base_url", self.base_url.as_deref()),
            ("app.fallback_origin", Some(self.fallback_origin.as_str())),
        ] {
            if let Some(url) = value.map(str::trim).filter(|s| !s.is_empty())
                && !(url.starts_with("http://") || url.starts_with("https://"))
            {
                return Err(ConfigError::app(format!(
                    "{name} must start with http:// or https://, got {url}"
                )));
            }
        }

        if self.fallback_origin.trim().is_empty() {
            return Err(ConfigError::app("app.fallback_origin cannot be empty"));
        }

        if !self.reset_path.starts_with('/') {
            return Err(ConfigError::app(format!(
                "app.reset_path must start with '/', got {}",
                self.reset_path
            )));
        }

        Ok(())
    }
}
