//! API error types
//!
//! Every failure leaving a handler is an [`ApiError`], rendered as
//! `{ "error": CODE, "message": text }`. Store and token details are logged,
//! never returned.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use tasks_auth::AuthError;
use tasks_store::StoreError;

/// Message returned for every internal failure
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path parameter or payload
    #[error("{0}")]
    BadRequest(String),

    /// Missing or rejected identity
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Resource absent or owned by someone else
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Internal failure; the detail is logged, not returned
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    // Helper constructors

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, .. } => Self::NotFound(entity),
            StoreError::AlreadyExists { entity, id } => {
                Self::Conflict(format!("{} '{}' already exists", entity, id))
            }
            StoreError::Invalid { field, message } => match field {
                "update" => Self::BadRequest(message),
                _ => Self::BadRequest(format!("{}: {}", field, message)),
            },
            StoreError::Database(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUser(username) => {
                Self::Conflict(format!("user '{}' already exists", username))
            }
            AuthError::InvalidCredentials => Self::Unauthorized("invalid username or password"),
            AuthError::InvalidInput(message) => Self::BadRequest(message),
            AuthError::MissingToken => Self::Unauthorized("missing token"),
            AuthError::TokenExpired => Self::Unauthorized("token expired"),
            AuthError::InvalidTokenFormat
            | AuthError::InvalidSignature
            | AuthError::InvalidToken(_) => Self::Unauthorized("invalid token"),
            AuthError::Store(e) => e.into(),
            e @ (AuthError::WeakSecret { .. }
            | AuthError::InvalidTtl(_)
            | AuthError::PasswordHash(_)) => {
                Self::Internal(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code (machine-readable)
    pub error: &'static str,
    /// Error message (human-readable)
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal(ref detail) = self {
            tracing::error!(error = %detail, status = %status, "Internal API error");
        } else {
            tracing::warn!(
                error_code = self.code(),
                error_message = %self,
                status = %status,
                "API error"
            );
        }

        let body = ErrorResponse {
            error: self.code(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
