//! Token service
//!
//! Issues and verifies HS256 identity tokens. The signing secret is handed in
//! once through [`TokenConfig`] and never changes for the life of the service.

use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use tasks_store::UserId;

use crate::claims::TokenClaims;
use crate::error::{AuthError, Result};

/// Maximum accepted token size (8 KiB)
pub const MAX_TOKEN_SIZE: usize = 8 * 1024;

/// Minimum signing secret length for HS256
pub const MIN_SECRET_LEN: usize = 32;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Default issuer claim
pub const DEFAULT_ISSUER: &str = "tasks";

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: Vec<u8>,
    /// Token time-to-live
    pub ttl: Duration,
    /// Issuer claim, checked on verification when set
    pub issuer: Option<String>,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl TokenConfig {
    /// Create a config with the given secret and default TTL/issuer
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: DEFAULT_TOKEN_TTL,
            issuer: Some(DEFAULT_ISSUER.to_string()),
        }
    }

    /// Set token TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Neither set nor check the issuer claim
    pub fn without_issuer(mut self) -> Self {
        self.issuer = None;
        self
    }
}

/// Mints and verifies identity tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
    issuer: Option<String>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// Fails if the secret is shorter than [`MIN_SECRET_LEN`].
    pub fn new(config: TokenConfig) -> Result<Self> {
        if config.secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::WeakSecret {
                min: MIN_SECRET_LEN,
                actual: config.secret.len(),
            });
        }

        let ttl = chrono::Duration::from_std(config.ttl)
            .map_err(|_| AuthError::InvalidTtl(format!("{:?} is out of range", config.ttl)))?;
        if chrono::Utc::now().checked_add_signed(ttl).is_none() {
            return Err(AuthError::InvalidTtl(format!(
                "{:?} overflows the expiry time",
                config.ttl
            )));
        }

        // Only HS256 is accepted; a token with any other `alg` header fails.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(ref issuer) = config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            validation,
            ttl,
            issuer: config.issuer,
        })
    }

    /// Sign a token for `user_id`
    pub fn issue(&self, user_id: UserId) -> Result<String> {
        let claims = TokenClaims::new(user_id, self.ttl, self.issuer.clone())?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(format!("failed to encode JWT: {}", e)))
    }

    /// Verify a token and return the user it identifies
    pub fn verify(&self, token: &str) -> Result<UserId> {
        Ok(self.decode(token)?.user_id)
    }

    /// Verify a token and return its full claims
    pub fn decode(&self, token: &str) -> Result<TokenClaims> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        if token.len() > MAX_TOKEN_SIZE {
            return Err(AuthError::InvalidTokenFormat);
        }

        let data =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!("JWT validation failed: {:?}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                    ErrorKind::InvalidToken | ErrorKind::Base64(_) => AuthError::InvalidTokenFormat,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TEST_SECRET, create_test_token_with_options, test_token_config};

    fn service() -> TokenService {
        TokenService::new(test_token_config()).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();
        let token = tokens.issue(UserId(42)).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), UserId(42));

        let claims = tokens.decode(&token).unwrap();
        assert_eq!(claims.subject, "42");
        assert_eq!(claims.issuer.as_deref(), Some(DEFAULT_ISSUER));
        assert_eq!(claims.expires_at - claims.issued_at, 12 * 3600);
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens = service();
        assert_ne!(
            tokens.issue(UserId(1)).unwrap(),
            tokens.issue(UserId(1)).unwrap()
        );
    }

    #[test]
    fn test_weak_secret_rejected() {
        let result = TokenService::new(TokenConfig::new(b"short".to_vec()));
        assert!(matches!(
            result,
            Err(AuthError::WeakSecret { min: 32, actual: 5 })
        ));
    }

    #[test]
    fn test_unrepresentable_ttl_rejected() {
        // Fits chrono::Duration, but now + ttl overflows the date range
        let far = Duration::from_secs(1_000_000 * 365 * 24 * 3600);
        let result = TokenService::new(test_token_config().with_ttl(far));
        assert!(matches!(result, Err(AuthError::InvalidTtl(_))));

        // Does not fit chrono::Duration at all
        let result = TokenService::new(test_token_config().with_ttl(Duration::MAX));
        assert!(matches!(result, Err(AuthError::InvalidTtl(_))));
    }

    #[test]
    fn test_expired_token() {
        let token = create_test_token_with_options(
            UserId(1),
            TEST_SECRET,
            Algorithm::HS256,
            chrono::Duration::seconds(-5),
            Some(DEFAULT_ISSUER),
        );
        assert!(matches!(service().verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret() {
        let token = create_test_token_with_options(
            UserId(1),
            b"another-secret-key-32-bytes-long",
            Algorithm::HS256,
            chrono::Duration::hours(1),
            Some(DEFAULT_ISSUER),
        );
        assert!(matches!(
            service().verify(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_algorithm() {
        let token = create_test_token_with_options(
            UserId(1),
            TEST_SECRET,
            Algorithm::HS384,
            chrono::Duration::hours(1),
            Some(DEFAULT_ISSUER),
        );
        let err = service().verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_wrong_issuer() {
        let token = create_test_token_with_options(
            UserId(1),
            TEST_SECRET,
            Algorithm::HS256,
            chrono::Duration::hours(1),
            Some("someone-else"),
        );
        assert!(service().verify(&token).unwrap_err().is_token_error());
    }

    #[test]
    fn test_issuer_not_checked_when_disabled() {
        let tokens = TokenService::new(test_token_config().without_issuer()).unwrap();
        let token = create_test_token_with_options(
            UserId(3),
            TEST_SECRET,
            Algorithm::HS256,
            chrono::Duration::hours(1),
            None,
        );
        assert_eq!(tokens.verify(&token).unwrap(), UserId(3));
    }

    #[test]
    fn test_malformed_tokens() {
        let tokens = service();
        assert!(matches!(tokens.verify(""), Err(AuthError::MissingToken)));
        assert!(matches!(
            tokens.verify("not-a-jwt"),
            Err(AuthError::InvalidTokenFormat)
        ));
        assert!(tokens.verify("a.b.c").unwrap_err().is_token_error());
    }

    #[test]
    fn test_oversized_token() {
        let token = "a".repeat(MAX_TOKEN_SIZE + 1);
        assert!(matches!(
            service().verify(&token),
            Err(AuthError::InvalidTokenFormat)
        ));
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let debug = format!("{:?}", test_token_config());
        assert!(debug.contains("redacted"));
        assert!(!debug.contains("test-secret"));
    }
}
