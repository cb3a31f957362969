//! Application state
//!
//! Built once at startup and cloned into every handler. Everything inside is
//! either immutable or a connection pool handle, apart from the metrics
//! registry.

use std::sync::Arc;
use std::time::Instant;

use tasks_auth::AuthService;
use tasks_store::{Database, ItemService, ListService};

use crate::metrics::RequestMetrics;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and token verification
    pub auth: Arc<AuthService>,
    /// Owner-scoped list operations
    pub lists: ListService,
    /// Owner-scoped item operations
    pub items: ItemService,
    /// Per-route request counters
    pub metrics: Arc<RequestMetrics>,
    /// Server start time for uptime
    pub started_at: Instant,
}

impl AppState {
    /// Wire services over `db` with the given auth service
    pub fn new(db: &Database, auth: AuthService) -> Self {
        Self {
            auth: Arc::new(auth),
            lists: ListService::new(db.lists()),
            items: ItemService::new(db.items(), db.lists()),
            metrics: Arc::new(RequestMetrics::new()),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
