//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::notice::NoticeDurations;
use crate::session::SessionPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub notices: NoticeConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session timing
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,

    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
}

fn default_ttl_hours() -> u64 {
    24
}

fn default_login_delay() -> u64 {
    1500
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            login_delay_ms: default_login_delay(),
        }
    }
}

impl SessionConfig {
    pub fn policy(&self) -> SessionPolicy {
        let ttl = i64::try_from(self.ttl_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .unwrap_or(chrono::Duration::MAX);
        SessionPolicy {
            ttl,
            login_delay: Duration::from_millis(self.login_delay_ms),
        }
    }
}

/// Credential service connection
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_auth_url")]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_auth_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_request_timeout() -> u64 {
    5000
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: default_auth_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

#[cfg(feature = "native")]
impl AuthConfig {
    pub fn client_config(&self) -> crate::auth::AuthClientConfig {
        crate::auth::AuthClientConfig {
            base_url: self.url.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Auto-dismiss delays for notices
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_error_ms")]
    pub error_ms: u64,

    #[serde(default = "default_success_ms")]
    pub success_ms: u64,

    #[serde(default = "default_info_ms")]
    pub info_ms: u64,
}

fn default_error_ms() -> u64 {
    5000
}

fn default_success_ms() -> u64 {
    3000
}

fn default_info_ms() -> u64 {
    5000
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            error_ms: default_error_ms(),
            success_ms: default_success_ms(),
            info_ms: default_info_ms(),
        }
    }
}

impl NoticeConfig {
    pub fn durations(&self) -> NoticeDurations {
        NoticeDurations {
            info: Duration::from_millis(self.info_ms),
            success: Duration::from_millis(self.success_ms),
            error: Duration::from_millis(self.error_ms),
        }
    }
}

/// Where the CLI keeps durable state
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    #[cfg(feature = "native")]
    {
        dirs::data_local_dir()
            .map(|p| p.join("sterling").to_string_lossy().to_string())
            .unwrap_or_else(|| "./sterling_data".to_string())
    }
    #[cfg(not(feature = "native"))]
    {
        "./sterling_data".to_string()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// File holding remember-me state
    pub fn durable_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("durable.json")
    }

    /// File standing in for the current tab's session storage
    pub fn tab_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("tab.json")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("sterling").join("config.toml")),
            Some(PathBuf::from("./sterling.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("STERLING_AUTH_URL") {
            self.auth.url = url;
        }
        if let Ok(data_dir) = std::env::var("STERLING_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Ok(hours) = std::env::var("STERLING_SESSION_TTL_HOURS") {
            if let Ok(h) = hours.parse() {
                self.session.ttl_hours = h;
            }
        }
        if let Ok(delay) = std::env::var("STERLING_LOGIN_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.session.login_delay_ms = d;
            }
        }
        if let Ok(level) = std::env::var("STERLING_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STERLING_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sterling Dashboard Configuration
#
# Environment variables override these settings:
# - STERLING_AUTH_URL
# - STERLING_DATA_DIR
# - STERLING_SESSION_TTL_HOURS
# - STERLING_LOGIN_DELAY_MS
# - STERLING_LOG_LEVEL
# - STERLING_LOG_FORMAT

[session]
# How long a login stays valid (hours)
ttl_hours = 24

# Simulated round-trip before credentials are checked (ms)
login_delay_ms = 1500

[auth]
# Credential verification service
url = "http://localhost:8090"

# Request timeout (ms)
request_timeout_ms = 5000

[notices]
# Auto-dismiss delays (ms)
error_ms = 5000
success_ms = 3000
info_ms = 5000

[storage]
# Directory for remember-me and session files
data_dir = "~/.local/share/sterling"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session.ttl_hours, 24);
        assert_eq!(config.session.login_delay_ms, 1500);
        assert_eq!(config.auth.url, "http://localhost:8090");
        assert_eq!(config.notices.error_ms, 5000);
        assert_eq!(config.notices.success_ms, 3000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_session_policy_conversion() {
        let policy = SessionConfig {
            ttl_hours: 8,
            login_delay_ms: 250,
        }
        .policy();
        assert_eq!(policy.ttl, chrono::Duration::hours(8));
        assert_eq!(policy.login_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let policy = SessionConfig {
            ttl_hours: u64::MAX,
            login_delay_ms: 0,
        }
        .policy();
        assert_eq!(policy.ttl, chrono::Duration::MAX);

        let session = crate::session::Session::new(chrono::Utc::now());
        assert_eq!(session.expires_at(policy.ttl), None);
    }

    #[test]
    fn test_notice_durations_conversion() {
        let durations = NoticeConfig::default().durations();
        assert_eq!(durations, NoticeDurations::default());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.session.ttl_hours, 24);
        assert_eq!(config.notices.info_ms, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[session]\nttl_hours = 12\n").unwrap();
        assert_eq!(config.session.ttl_hours, 12);
        assert_eq!(config.session.login_delay_ms, 1500);
        assert_eq!(config.auth.request_timeout_ms, 5000);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_load_missing_file() {
        let result = Config::load(std::path::Path::new("/nonexistent/sterling.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_storage_paths() {
        let storage = StorageConfig {
            data_dir: "/tmp/sterling".to_string(),
        };
        assert_eq!(storage.durable_path(), PathBuf::from("/tmp/sterling/durable.json"));
        assert_eq!(storage.tab_path(), PathBuf::from("/tmp/sterling/tab.json"));
    }
}
