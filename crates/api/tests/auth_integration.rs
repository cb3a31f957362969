//! Integration tests for auth endpoints
//!
//! Tests: sign-up, sign-in, bearer header handling, token validation

mod common;

use axum::http::{Method, StatusCode};
use chrono::Duration;
use jsonwebtoken::Algorithm;
use serde_json::json;

use common::{send, send_with_header, sign_in, sign_up, test_app};
use tasks_auth::test_utils::{self, TEST_SECRET};
use tasks_auth::DEFAULT_ISSUER;
use tasks_store::UserId;

// =============================================================================
// Sign-up / sign-in
// =============================================================================

#[tokio::test]
async fn test_sign_up_returns_id() {
    let app = test_app().await;

    let first = sign_up(&app, "alice", "pw1").await;
    let second = sign_up(&app, "bob", "pw2").await;

    assert!(first > 0);
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_duplicate_sign_up_rejected() {
    let app = test_app().await;
    sign_up(&app, "alice", "pw1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/sign-up",
        None,
        Some(json!({ "username": "alice", "password": "other" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_sign_up_missing_fields() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/sign-up",
        None,
        Some(json!({ "username": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/sign-up",
        None,
        Some(json!({ "username": "", "password": "pw1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sign_in_returns_usable_token() {
    let app = test_app().await;
    sign_up(&app, "alice", "pw1").await;

    let token = sign_in(&app, "alice", "pw1").await;
    assert_eq!(token.split('.').count(), 3);

    let (status, body) = send(&app, Method::GET, "/api/lists", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_sign_in_bad_credentials() {
    let app = test_app().await;
    sign_up(&app, "alice", "pw1").await;

    for (username, password) in [("alice", "wrong"), ("nobody", "pw1")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/auth/sign-in",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "invalid username or password");
    }
}

// =============================================================================
// Bearer header
// =============================================================================

#[tokio::test]
async fn test_protected_route_requires_auth() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/lists", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "empty auth header");
}

#[tokio::test]
async fn test_malformed_auth_headers() {
    let app = test_app().await;
    let token = test_utils::create_test_token(UserId(1));

    for header in [
        "Bearer".to_string(),
        "Bearer ".to_string(),
        format!("Basic {}", token),
        format!("bearer {}", token),
        format!("Bearer {} extra", token),
        format!("Bearer  {}", token),
    ] {
        let status = send_with_header(&app, "/api/lists", &header).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header: {:?}", header);
    }
}

#[tokio::test]
async fn test_invalid_token() {
    let app = test_app().await;

    let status = send_with_header(&app, "/api/lists", "Bearer invalid_token_here").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token() {
    let app = test_app().await;
    let id = sign_up(&app, "alice", "pw1").await;

    let token = test_utils::create_expired_token(UserId(id));
    let (status, body) = send(&app, Method::GET, "/api/lists", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "token expired");
}

#[tokio::test]
async fn test_wrong_algorithm_token() {
    let app = test_app().await;
    let id = sign_up(&app, "alice", "pw1").await;

    let token = test_utils::create_test_token_with_options(
        UserId(id),
        TEST_SECRET,
        Algorithm::HS512,
        Duration::hours(1),
        Some(DEFAULT_ISSUER),
    );
    let (status, _) = send(&app, Method::GET, "/api/lists", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_foreign_secret_token() {
    let app = test_app().await;
    let id = sign_up(&app, "alice", "pw1").await;

    let token = test_utils::create_test_token_with_options(
        UserId(id),
        b"some-other-secret-that-is-32-byte",
        Algorithm::HS256,
        Duration::hours(1),
        Some(DEFAULT_ISSUER),
    );
    let (status, body) = send(&app, Method::GET, "/api/lists", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid token");
}

#[tokio::test]
async fn test_auth_routes_do_not_require_token() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/sign-in",
        None,
        Some(json!({ "username": "nobody", "password": "pw" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "invalid username or password");
}
