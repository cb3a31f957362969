//! Shared helpers for API integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use tasks_api::{AppState, build_router};
use tasks_auth::test_utils;
use tasks_store::Database;

/// Router over a fresh in-memory database
pub async fn test_app() -> Router {
    let db = Database::in_memory().await.unwrap();
    let auth = test_utils::test_auth_service(db.users());
    build_router(AppState::new(&db, auth))
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(json!({}))
}

/// Send a request, returning status and JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

/// Send a request with a raw `Authorization` header value
pub async fn send_with_header(app: &Router, uri: &str, authorization: &str) -> StatusCode {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}

/// Register a user and return its id
pub async fn sign_up(app: &Router, username: &str, password: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/sign-up",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign-up failed: {}", body);
    body["id"].as_i64().unwrap()
}

/// Log in and return the token
pub async fn sign_in(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/sign-in",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign-in failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Register and log in, returning the token
pub async fn user_token(app: &Router, username: &str) -> String {
    sign_up(app, username, "pw1").await;
    sign_in(app, username, "pw1").await
}

/// Create a list and return its id
pub async fn create_list(app: &Router, token: &str, title: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/lists",
        Some(token),
        Some(json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create list failed: {}", body);
    body["id"].as_i64().unwrap()
}

/// Create an item in a list and return its id
pub async fn create_item(app: &Router, token: &str, list_id: i64, title: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/api/lists/{}/items", list_id),
        Some(token),
        Some(json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create item failed: {}", body);
    body["id"].as_i64().unwrap()
}
