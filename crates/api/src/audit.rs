//! Audit logging
//!
//! Security-relevant events go to the `audit` tracing target so a subscriber
//! can route them separately from operational logs.
//!
//! # What gets logged
//!
//! - Sign-up and sign-in (success/failure)
//! - List and item create/update/delete
//!
//! # Example log entry
//!
//! ```json
//! {
//!   "level": "INFO",
//!   "target": "audit",
//!   "action": "list.delete",
//!   "user_id": 3,
//!   "list_id": 17,
//!   "span": { "method": "DELETE", "path": "/api/lists/17", "client_ip": "10.0.0.4" }
//! }
//! ```

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, warn};

/// Audit event action types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    // Auth
    SignUp,
    SignIn,

    // Lists
    ListCreate,
    ListUpdate,
    ListDelete,

    // Items
    ItemCreate,
    ItemUpdate,
    ItemDelete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignUp => "auth.sign_up",
            Self::SignIn => "auth.sign_in",
            Self::ListCreate => "list.create",
            Self::ListUpdate => "list.update",
            Self::ListDelete => "list.delete",
            Self::ItemCreate => "item.create",
            Self::ItemUpdate => "item.update",
            Self::ItemDelete => "item.delete",
        }
    }
}

/// Log an audit event (call from handlers for business-level events)
#[macro_export]
macro_rules! audit {
    ($action:expr, $($field:tt)*) => {
        tracing::info!(
            target: "audit",
            action = $action.as_str(),
            status = "success",
            $($field)*
        )
    };
}

/// Log a failed audit event
#[macro_export]
macro_rules! audit_fail {
    ($action:expr, $reason:expr, $($field:tt)*) => {
        tracing::warn!(
            target: "audit",
            action = $action.as_str(),
            status = "failure",
            reason = %$reason,
            $($field)*
        )
    };
}

/// Middleware that adds audit context to all requests
///
/// Wraps the request in a span carrying method, path and client IP (from
/// `X-Forwarded-For` or `X-Real-IP`), so `audit!` events inherit them.
pub async fn audit_layer(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let client_ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .or_else(|| {
            request
                .headers()
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "unknown".to_string());

    let span = tracing::info_span!(
        target: "audit",
        "request",
        method = %method,
        path = %path,
        client_ip = %client_ip,
    );

    async move {
        let response = next.run(request).await;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            warn!(target: "audit", status = status.as_u16(), "request_completed");
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_strings() {
        assert_eq!(AuditAction::SignIn.as_str(), "auth.sign_in");
        assert_eq!(AuditAction::ListDelete.as_str(), "list.delete");
        assert_eq!(AuditAction::ItemCreate.as_str(), "item.create");
    }
}
