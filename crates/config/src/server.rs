//! HTTP server configuration

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// HTTP server configuration
///
/// # Example
///
/// ```toml
/// [server]
/// host = "0.0.0.0"          # default
/// port = 8000               # default
/// db_path = "data/tasks.db" # default
/// audit_logging = false     # default
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// SQLite database file
    pub db_path: PathBuf,

    /// Emit audit events for auth and resource mutations
    pub audit_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            db_path: PathBuf::from("data/tasks.db"),
            audit_logging: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ConfigError::invalid_value("server", "host", "must not be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::invalid_value("server", "port", "must not be 0"));
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value(
                "server",
                "db_path",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.db_path, PathBuf::from("data/tasks.db"));
        assert!(!config.audit_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let config: ServerConfig = toml::from_str("port = 0").unwrap();
        assert!(config.validate().is_err());
    }
}
