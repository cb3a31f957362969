//! Request metrics
//!
//! Per-route request counts and latency, recorded by [`track_metrics`] and
//! served as JSON from `GET /metrics`. Counters only ever grow.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use parking_lot::Mutex;
use serde::Serialize;

/// Route label for requests that matched no route
const UNMATCHED: &str = "<unmatched>";

#[derive(Debug, Default, Clone, Copy)]
struct RouteStats {
    count: u64,
    client_errors: u64,
    server_errors: u64,
    total: Duration,
    max: Duration,
}

/// Shared registry of per-route counters
#[derive(Debug, Default)]
pub struct RequestMetrics {
    routes: Mutex<BTreeMap<(String, String), RouteStats>>,
}

/// Snapshot of one route's counters
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSnapshot {
    pub method: String,
    pub route: String,
    pub count: u64,
    pub client_errors: u64,
    pub server_errors: u64,
    pub avg_latency_ms: f64,
    pub max_latency_ms: f64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request
    pub fn record(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        let mut routes = self.routes.lock();
        let stats = routes
            .entry((route.to_string(), method.to_string()))
            .or_default();

        stats.count += 1;
        match status {
            400..=499 => stats.client_errors += 1,
            500..=599 => stats.server_errors += 1,
            _ => {}
        }
        stats.total += elapsed;
        stats.max = stats.max.max(elapsed);
    }

    /// Total requests across all routes
    pub fn total_requests(&self) -> u64 {
        self.routes.lock().values().map(|s| s.count).sum()
    }

    /// Counters ordered by route, then method
    pub fn snapshot(&self) -> Vec<RouteSnapshot> {
        self.routes
            .lock()
            .iter()
            .map(|((route, method), stats)| RouteSnapshot {
                method: method.clone(),
                route: route.clone(),
                count: stats.count,
                client_errors: stats.client_errors,
                server_errors: stats.server_errors,
                avg_latency_ms: millis(stats.total) / stats.count.max(1) as f64,
                max_latency_ms: millis(stats.max),
            })
            .collect()
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Middleware recording every request against its matched route template
pub async fn track_metrics(
    State(metrics): State<Arc<RequestMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED.to_string());

    let start = Instant::now();
    let response = next.run(request).await;

    metrics.record(&method, &route, response.status().as_u16(), start.elapsed());
    response
}
