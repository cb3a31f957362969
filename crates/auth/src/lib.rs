//! Tasks - Authentication
//!
//! Registration, login and identity tokens.
//!
//! # Overview
//!
//! | Piece | Role |
//! |-------|------|
//! | [`CredentialStore`] | Persists users, checks passwords against Argon2 hashes |
//! | [`TokenService`] | Signs and verifies HS256 JWTs carrying the user id |
//! | [`AuthService`] | `create_user`, `generate_token`, `parse_token` |
//!
//! # Tokens
//!
//! Plain JWTs, sent as `Authorization: Bearer <jwt>`:
//! ```text
//! eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1aWQiOjEsInN1YiI6IjEi...
//! ```
//! - Contains the user id (`uid`), expiry, issuer and a unique `jti`
//! - Expiry is the only way a token stops being valid

mod claims;
mod credentials;
mod error;
pub mod password;
mod service;
mod token;

/// Test utilities for generating JWT tokens
pub mod test_utils;

pub use claims::TokenClaims;
pub use credentials::{CredentialStore, StoreCredentials, User};
pub use error::{AuthError, Result};
pub use service::AuthService;
pub use token::{
    DEFAULT_ISSUER, DEFAULT_TOKEN_TTL, MAX_TOKEN_SIZE, MIN_SECRET_LEN, TokenConfig, TokenService,
};
