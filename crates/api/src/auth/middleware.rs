//! Authentication middleware for Axum
//!
//! [`require_auth`] verifies the bearer token and stores an [`Identity`] in
//! the request extensions. Handlers take it back out with [`AuthUser`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::error;

use tasks_auth::MAX_TOKEN_SIZE;
use tasks_store::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Authorization scheme
const BEARER: &str = "Bearer";

/// Verified user identity, attached to the request by [`require_auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity(pub UserId);

/// Extract the token from `Authorization: Bearer <token>`
///
/// The header must have exactly two space-separated parts, the first being
/// `Bearer` and the second non-empty.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(AUTHORIZATION)?;

    // "Bearer " + token
    if header.len() > MAX_TOKEN_SIZE + BEARER.len() + 1 {
        return None;
    }

    let value = header.to_str().ok()?;
    let mut parts = value.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Identity middleware
///
/// Rejects with 401 before the handler runs if the header is absent or
/// malformed, or the token fails verification.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token =
        extract_bearer(request.headers()).ok_or(ApiError::Unauthorized("empty auth header"))?;
    let user_id = state.auth.parse_token(token)?;

    request.extensions_mut().insert(Identity(user_id));
    Ok(next.run(request).await)
}

/// Authenticated user extractor
///
/// Takes the [`Identity`] out of the request, so it can be extracted once per
/// request. A route reached without [`require_auth`] fails with 401.
///
/// # Example
///
/// ```ignore
/// async fn handler(AuthUser(user_id): AuthUser) -> impl IntoResponse {
///     format!("Hello, user {}!", user_id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.remove::<Identity>() {
            Some(Identity(user_id)) => Ok(AuthUser(user_id)),
            None => {
                error!(path = %parts.uri.path(), "User identity missing from request context");
                Err(ApiError::Unauthorized("user id not found"))
            }
        }
    }
}
