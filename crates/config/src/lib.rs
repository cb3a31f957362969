//! Tasks Configuration
//!
//! TOML-based configuration loading with sensible defaults. Every section is
//! optional; only the JWT secret has no default.
//!
//! # Parsing
//!
//! ```
//! use tasks_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[server]\nport = 9000").unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [auth]
//! jwt_secret = "change-me-to-something-at-least-32-bytes"
//! token_ttl = "12h"
//!
//! [server]
//! port = 8000
//! db_path = "data/tasks.db"
//! ```

mod auth;
mod error;
mod logging;
mod server;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use auth::{AuthConfig, MAX_TOKEN_TTL, MIN_JWT_SECRET_LEN};
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use server::ServerConfig;

/// Environment variable that overrides `auth.jwt_secret`
pub const JWT_SECRET_ENV: &str = "TASKS_JWT_SECRET";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// Token signing and lifetime
    pub auth: AuthConfig,

    /// HTTP listener and database location
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Replace the JWT secret (from the environment or CLI) and re-validate
    pub fn with_jwt_secret(mut self, secret: impl Into<String>) -> Result<Self> {
        self.auth.jwt_secret = Some(secret.into());
        self.validate()?;
        Ok(self)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.auth.validate()?;
        self.server.validate()?;
        Ok(())
    }

    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(12 * 3600));
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[log]
level = "debug"
format = "json"

[auth]
jwt_secret = "0123456789abcdef0123456789abcdef"
token_ttl = "1h"
issuer = "todo"

[server]
host = "127.0.0.1"
port = 9000
db_path = "/tmp/tasks.db"
audit_logging = true
"#;
        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.auth.issuer(), Some("todo"));
        assert_eq!(config.server.bind_addr(), "127.0.0.1:9000");
        assert!(config.server.audit_logging);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_str("[server"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_validation_runs_on_parse() {
        let result = Config::from_str("[auth]\njwt_secret = \"too-short\"");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_with_jwt_secret() {
        let config = Config::default()
            .with_jwt_secret("0123456789abcdef0123456789abcdef")
            .unwrap();
        assert!(config.auth.require_secret().is_ok());

        assert!(Config::default().with_jwt_secret("short").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/tasks.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tasks.toml"));
    }
}
