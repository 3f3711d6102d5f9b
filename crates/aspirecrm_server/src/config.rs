//! Server configuration.
//!
//! # Responsibility
//! - Collect every runtime knob into one injectable struct: bind address,
//!   storage location, session signing secret, logging.
//!
//! # Invariants
//! - Nothing outside this module reads configuration environment variables.
//! - The signing secret is never serialized or logged.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_BIND: &str = "ASPIRECRM_BIND";
pub const ENV_DB_PATH: &str = "ASPIRECRM_DB_PATH";
pub const ENV_SESSION_SECRET: &str = "ASPIRECRM_SESSION_SECRET";
pub const ENV_LOG_DIR: &str = "ASPIRECRM_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "ASPIRECRM_LOG_LEVEL";

/// Development-only fallback secret. Startup logs a warning when it is
/// still in use.
pub const DEFAULT_SESSION_SECRET: &str = "aspirecrm-dev-secret-change-me";

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_DB_PATH: &str = "aspirecrm.sqlite3";
const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddr(value) => {
                write!(f, "invalid bind address `{value}`; expected host:port")
            }
        }
    }
}

impl Error for ConfigError {}

/// Complete runtime configuration for one server process.
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    #[serde(skip_serializing)]
    pub session_secret: String,
    pub log_dir: String,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080))),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_level: aspirecrm_core::default_log_level().to_string(),
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from `ASPIRECRM_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var(ENV_BIND) {
            config.bind_addr = bind
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(bind))?;
        }
        if let Ok(path) = std::env::var(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Ok(secret) = std::env::var(ENV_SESSION_SECRET) {
            config.session_secret = secret;
        }
        if let Ok(dir) = std::env::var(ENV_LOG_DIR) {
            config.log_dir = dir;
        }
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// True while the development fallback secret is still active.
    pub fn uses_default_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn default_config_flags_the_dev_secret() {
        let config = ServerConfig::default();
        assert!(config.uses_default_secret());
    }

    #[test]
    fn default_secret_is_not_serialized() {
        let config = ServerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains(&config.session_secret));
    }
}
