//! Test utilities for generating JWT tokens
//!
//! These helpers create real signed JWTs so tests go through the actual
//! verification path instead of a mock.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use tasks_store::{UserId, UserRepo};

use crate::claims::TokenClaims;
use crate::credentials::StoreCredentials;
use crate::service::AuthService;
use crate::token::{DEFAULT_ISSUER, TokenConfig, TokenService};

/// Test secret for JWT signing (32 bytes for HS256)
pub const TEST_SECRET: &[u8] = b"test-secret-key-32-bytes-long!!!";

/// Token config signed with [`TEST_SECRET`]
pub fn test_token_config() -> TokenConfig {
    TokenConfig::new(TEST_SECRET.to_vec())
}

/// Auth service over `users` using [`test_token_config`]
pub fn test_auth_service(users: UserRepo) -> AuthService {
    let tokens = TokenService::new(test_token_config()).expect("test secret is long enough");
    AuthService::new(Arc::new(StoreCredentials::new(users)), tokens)
}

/// Create a valid test token for `user_id`
pub fn create_test_token(user_id: UserId) -> String {
    create_test_token_with_options(
        user_id,
        TEST_SECRET,
        Algorithm::HS256,
        Duration::hours(1),
        Some(DEFAULT_ISSUER),
    )
}

/// Create a token for `user_id` that expired a minute ago
pub fn create_expired_token(user_id: UserId) -> String {
    create_test_token_with_options(
        user_id,
        TEST_SECRET,
        Algorithm::HS256,
        Duration::minutes(-1),
        Some(DEFAULT_ISSUER),
    )
}

/// Create a test token with full control over signing options
pub fn create_test_token_with_options(
    user_id: UserId,
    secret: &[u8],
    algorithm: Algorithm,
    expires_in: Duration,
    issuer: Option<&str>,
) -> String {
    let now = Utc::now();

    let claims = TokenClaims {
        user_id,
        subject: user_id.to_string(),
        expires_at: (now + expires_in).timestamp(),
        issued_at: now.timestamp(),
        issuer: issuer.map(String::from),
        jwt_id: format!("test-token-{}", user_id),
    };

    encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("failed to encode test JWT")
}
