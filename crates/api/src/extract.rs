//! Request extractors with API error rejections

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::ApiError;

/// JSON body extractor that rejects with [`ApiError::BadRequest`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Positive integer `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i64);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        if id <= 0 {
            return Err(invalid_id());
        }
        Ok(Self(id))
    }
}

fn invalid_id() -> ApiError {
    ApiError::bad_request("invalid id param")
}
