//! Authentication error types

use thiserror::Error;

use tasks_store::StoreError;

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during authentication operations
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username is already registered
    #[error("user already exists: {0}")]
    DuplicateUser(String),

    /// Unknown username or wrong password
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Registration or login payload rejected
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // JWT validation errors
    /// Token is missing or empty
    #[error("missing token")]
    MissingToken,

    /// Token is too large or not a JWT
    #[error("invalid token format")]
    InvalidTokenFormat,

    /// JWT signature verification failed
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Token could not be decoded or its claims were rejected
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Signing secret does not meet the minimum length
    #[error("JWT secret must be at least {min} bytes (got {actual})")]
    WeakSecret { min: usize, actual: usize },

    /// Token lifetime cannot be represented as an expiry timestamp
    #[error("invalid token TTL: {0}")]
    InvalidTtl(String),

    /// Password hashing failed
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// Underlying store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for every token verification failure
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Self::MissingToken
                | Self::InvalidTokenFormat
                | Self::InvalidSignature
                | Self::TokenExpired
                | Self::InvalidToken(_)
        )
    }
}
