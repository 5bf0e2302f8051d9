mod app_config;
mod auth_config;
mod backend_mode;
mod config;
mod error;
mod local_config;
mod log_level;
mod logging_config;
mod remote_config;

#[cfg(test)]
mod tests;

pub use app_config::AppConfig;
pub use auth_config::AuthConfig;
pub use backend_mode::BackendMode;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use local_config::LocalConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;

pub const CONFIG_DIR_ENV: &str = "VB_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".vetbook";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 15;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOCAL_DIR: &str = "data";

const DEFAULT_FALLBACK_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_RESET_PATH: &str = "/reset-password";

const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SIGNUP_TIMEOUT_SECS: u64 = 12;
const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
