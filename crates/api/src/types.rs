//! API response types

use serde::Serialize;

/// Generated identifier of a created resource
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}

impl IdResponse {
    pub fn new(id: impl Into<i64>) -> Self {
        Self { id: id.into() }
    }
}

/// Signed token returned by sign-in
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Fixed acknowledgement for update and delete
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Collection wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
