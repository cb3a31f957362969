//! Tasks - HTTP API
//!
//! Axum router for registration, login, and owner-scoped list/item CRUD.
//!
//! # Layers
//!
//! ```text
//! request → [audit span] → metrics → route
//!                                     ├─ /health, /metrics, /auth/*   (open)
//!                                     └─ /api/*  → require_auth → handler(AuthUser)
//! ```
//!
//! # Example
//!
//! ```ignore
//! let state = AppState::new(&db, auth_service);
//! let app = build_router_with_options(state, RouterOptions { audit_logging: true });
//! axum::serve(listener, app).await?;
//! ```

pub mod audit;
pub mod auth;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{ApiError, Result};
pub use routes::{RouterOptions, build_router, build_router_with_options};
pub use state::AppState;
