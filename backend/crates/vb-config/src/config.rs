use crate::{
    AppConfig, AuthConfig, BackendMode, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME, LocalConfig, LoggingConfig, RemoteConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub local: LocalConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for VB_CONFIG_DIR env var, else use ./.vetbook/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply VB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: VB_CONFIG_DIR env var > ./.vetbook/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.remote.validate()?;
        self.local.validate()?;
        self.app.validate()?;
        self.auth.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Remote only when both the URL and the anon key are configured.
    pub fn backend_mode(&self) -> BackendMode {
        if self.remote.credentials().is_some() {
            BackendMode::Remote
        } else {
            BackendMode::Local
        }
    }

    /// Absolute path of the local collection directory.
    pub fn local_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.local.dir))
    }

    /// Absolute path of the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// Redirect target embedded in password-reset emails.
    ///
    /// Uses `app.base_url` when set. Otherwise falls back to
    /// `app.fallback_origin` and warns, loudly when that origin points at
    /// localhost since such a link is unreachable from a deployed site.
    pub fn reset_redirect_url(&self) -> String {
        let base = match self
            .app
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(base) => base,
            None => {
                let origin = self.app.fallback_origin.trim();
                if is_local_origin(origin) {
                    warn!(
                        "app.base_url is not set; password reset links will point at {origin}, which is not reachable outside this machine"
                    );
                } else {
                    warn!("app.base_url is not set; falling back to {origin} for password reset links");
                }
                origin
            }
        };

        format!("{}{}", base.trim_end_matches('/'), self.app.reset_path)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  backend: {}", self.backend_mode());
        info!(
            "  remote: url={}, anon_key={}, timeout={}s",
            self.remote.url.as_deref().unwrap_or("<unset>"),
            if self.remote.anon_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.remote.request_timeout_secs
        );
        info!("  local: {}", self.local.dir);
        info!(
            "  app: base_url={}, reset_path={}",
            self.app.base_url.as_deref().unwrap_or("<unset>"),
            self.app.reset_path
        );
        info!(
            "  auth: login={}s, signup={}s, request={}s, min_password={}",
            self.auth.login_timeout_secs,
            self.auth.signup_timeout_secs,
            self.auth.request_timeout_secs,
            self.auth.min_password_length
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Remote
        Self::apply_env_option_string("VB_REMOTE_URL", &mut self.remote.url);
        Self::apply_env_option_string("VB_REMOTE_ANON_KEY", &mut self.remote.anon_key);
        Self::apply_env_parse(
            "VB_REMOTE_TIMEOUT_SECS",
            &mut self.remote.request_timeout_secs,
        );

        // Local
        Self::apply_env_string("VB_LOCAL_DIR", &mut self.local.dir);

        // App
        Self::apply_env_option_string("VB_APP_BASE_URL", &mut self.app.base_url);
        Self::apply_env_string("VB_APP_FALLBACK_ORIGIN", &mut self.app.fallback_origin);
        Self::apply_env_string("VB_APP_RESET_PATH", &mut self.app.reset_path);

        // Auth
        Self::apply_env_parse(
            "VB_AUTH_LOGIN_TIMEOUT_SECS",
            &mut self.auth.login_timeout_secs,
        );
        Self::apply_env_parse(
            "VB_AUTH_SIGNUP_TIMEOUT_SECS",
            &mut self.auth.signup_timeout_secs,
        );
        Self::apply_env_parse(
            "VB_AUTH_REQUEST_TIMEOUT_SECS",
            &mut self.auth.request_timeout_secs,
        );
        Self::apply_env_parse(
            "VB_AUTH_MIN_PASSWORD_LENGTH",
            &mut self.auth.min_password_length,
        );

        // Logging
        Self::apply_env_parse("VB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("VB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("VB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the setting.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.trim().is_empty() { None } else { Some(val) };
        }
    }
}

fn is_local_origin(origin: &str) -> bool {
    let host = origin
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    host.starts_with("localhost") || host.starts_with("127.0.0.1") || host.starts_with("[::1]")
}
