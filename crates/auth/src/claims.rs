//! JWT token claims

use serde::{Deserialize, Serialize};

use tasks_store::UserId;

use crate::error::{AuthError, Result};

/// Claims carried by an identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    #[serde(rename = "uid")]
    pub user_id: UserId,

    // Standard JWT claims
    /// Subject (user ID as a string)
    #[serde(rename = "sub")]
    pub subject: String,

    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    pub expires_at: i64,

    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Issuer
    #[serde(rename = "iss", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// JWT ID
    #[serde(rename = "jti")]
    pub jwt_id: String,
}

impl TokenClaims {
    /// Build claims for `user_id` valid for `ttl` from now
    ///
    /// Fails if `now + ttl` falls outside the representable date range.
    pub fn new(user_id: UserId, ttl: chrono::Duration, issuer: Option<String>) -> Result<Self> {
        let now = chrono::Utc::now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AuthError::InvalidTtl(format!("{} overflows the expiry time", ttl))
        })?;

        Ok(Self {
            user_id,
            subject: user_id.to_string(),
            expires_at: expires_at.timestamp(),
            issued_at: now.timestamp(),
            issuer,
            jwt_id: uuid::Uuid::new_v4().to_string(),
        })
    }
}
