//! Operations routes
//!
//! Health check and request metrics. These routes do not require
//! authentication.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::metrics::RouteSnapshot;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

/// Request metrics response
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub uptime_secs: u64,
    pub total_requests: u64,
    pub routes: Vec<RouteSnapshot>,
}

/// Operations routes (health, metrics)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
}

/// GET /health
///
/// Always 200 while the server is running.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.uptime_secs(),
    })
}

/// GET /metrics
async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        uptime_secs: state.uptime_secs(),
        total_requests: state.metrics.total_requests(),
        routes: state.metrics.snapshot(),
    })
}
