use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOCAL_DIR};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// Collection directory, relative to the config directory.
    pub dir: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_LOCAL_DIR),
        }
    }
}

impl LocalConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::local("local.dir cannot be empty"));
        }

        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::local(
                "local.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
