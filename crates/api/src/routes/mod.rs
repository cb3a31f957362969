//! API routes
//!
//! | Group | Paths | Auth |
//! |-------|-------|------|
//! | ops | `/health`, `/metrics` | no |
//! | auth | `/auth/sign-up`, `/auth/sign-in` | no |
//! | lists | `/api/lists...` | bearer token |
//! | items | `/api/items/{id}` | bearer token |

pub mod auth;
pub mod items;
pub mod lists;
pub mod ops;

use axum::{Router, middleware};

use crate::audit::audit_layer;
use crate::auth::require_auth;
use crate::metrics::track_metrics;
use crate::state::AppState;

/// Options for building the router
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Enable audit logging middleware
    pub audit_logging: bool,
}

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

/// Build the complete API router with options
pub fn build_router_with_options(state: AppState, options: RouterOptions) -> Router {
    // Identity middleware runs only for matched /api routes
    let protected = lists::routes()
        .merge(items::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let router = Router::new()
        .merge(ops::routes())
        .merge(auth::routes())
        .merge(protected)
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            track_metrics,
        ));

    let router = if options.audit_logging {
        router.layer(middleware::from_fn(audit_layer))
    } else {
        router
    };

    router.with_state(state)
}
