//! Authentication configuration

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Minimum JWT secret length in bytes
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Authentication configuration
///
/// # Example
///
/// ```toml
/// [auth]
/// jwt_secret = "your-secret-key-at-least-32-characters-long"
/// token_ttl = "12h"
/// issuer = "tasks"
/// ```
///
/// The secret can also come from `TASKS_JWT_SECRET`, which takes precedence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT signing secret, at least 32 bytes
    pub jwt_secret: Option<String>,

    /// Token lifetime
    /// Default: 12 hours
    #[serde(with = "humantime_serde")]
    pub token_ttl: Duration,

    /// Issuer claim; an empty string disables issuer checks
    /// Default: "tasks"
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: Duration::from_secs(12 * 60 * 60),
            issuer: "tasks".to_string(),
        }
    }
}

impl AuthConfig {
    /// The secret, or an error if it was never provided
    pub fn require_secret(&self) -> Result<&[u8]> {
        self.jwt_secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or(ConfigError::missing_field("auth", "jwt_secret"))
    }

    /// Issuer claim, `None` when disabled
    pub fn issuer(&self) -> Option<&str> {
        (!self.issuer.is_empty()).then_some(self.issuer.as_str())
    }

    /// Validate the fields that are set
    ///
    /// A missing secret is not an error here; it may still arrive from the
    /// environment. Use [`require_secret`](Self::require_secret) at startup.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LEN
        {
            return Err(ConfigError::invalid_value(
                "auth",
                "jwt_secret",
                format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            ));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::invalid_value(
                "auth",
                "token_ttl",
                "must be greater than zero",
            ));
        }
        if self.token_ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::invalid_value(
                "auth",
                "token_ttl",
                "must be at most 365 days",
            ));
        }
        Ok(())
    }
}
