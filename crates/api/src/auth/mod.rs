//! Identity middleware and extractor
//!
//! ```ignore
//! use tasks_api::auth::{AuthUser, require_auth};
//!
//! // Every route in `protected` needs `Authorization: Bearer <token>`
//! let protected = Router::new()
//!     .route("/api/lists", get(get_lists))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//!
//! async fn get_lists(user: AuthUser) -> impl IntoResponse { }
//! ```

pub mod middleware;

pub use middleware::{AuthUser, Identity, extract_bearer, require_auth};
