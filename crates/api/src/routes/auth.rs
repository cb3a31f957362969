//! Authentication routes
//!
//! Registration and login. Neither requires a token.

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::audit::AuditAction;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::{IdResponse, TokenResponse};

/// Auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in))
}

/// Credentials payload for sign-up and sign-in
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Register a user
///
/// POST /auth/sign-up
async fn sign_up(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<Json<IdResponse>> {
    let id = state
        .auth
        .create_user(&req.username, &req.password)
        .await
        .inspect_err(|e| {
            crate::audit_fail!(AuditAction::SignUp, e, username = %req.username);
        })?;

    crate::audit!(AuditAction::SignUp, user_id = %id, username = %req.username);
    Ok(Json(IdResponse::new(id)))
}

/// Log in and receive a token
///
/// POST /auth/sign-in
async fn sign_in(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>> {
    let token = state
        .auth
        .generate_token(&req.username, &req.password)
        .await
        .inspect_err(|e| {
            crate::audit_fail!(AuditAction::SignIn, e, username = %req.username);
        })?;

    crate::audit!(AuditAction::SignIn, username = %req.username);
    Ok(Json(TokenResponse { token }))
}
