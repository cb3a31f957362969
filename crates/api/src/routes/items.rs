//! Item endpoints
//!
//! Items are addressed by bare id; ownership is resolved through the item's
//! list, not through the path.

use axum::{Json, Router, extract::State, routing::get};

use tasks_store::{ItemId, TodoItem, UpdateItemInput};

use crate::audit::AuditAction;
use crate::auth::AuthUser;
use crate::error::Result;
use crate::extract::{ApiJson, IdParam};
use crate::state::AppState;
use crate::types::StatusResponse;

/// Item routes
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/items/{id}",
        get(get_item).put(update_item).delete(delete_item),
    )
}

/// GET /api/items/{id}
async fn get_item(
    AuthUser(user_id): AuthUser,
    IdParam(id): IdParam,
    State(state): State<AppState>,
) -> Result<Json<TodoItem>> {
    let item = state.items.get_by_id(user_id, ItemId(id)).await?;
    Ok(Json(item))
}

/// PUT /api/items/{id}
async fn update_item(
    AuthUser(user_id): AuthUser,
    IdParam(id): IdParam,
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateItemInput>,
) -> Result<Json<StatusResponse>> {
    state.items.update(user_id, ItemId(id), req).await?;

    crate::audit!(AuditAction::ItemUpdate, user_id = %user_id, item_id = id);
    Ok(Json(StatusResponse::ok()))
}

/// DELETE /api/items/{id}
async fn delete_item(
    AuthUser(user_id): AuthUser,
    IdParam(id): IdParam,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>> {
    state.items.delete(user_id, ItemId(id)).await?;

    crate::audit!(AuditAction::ItemDelete, user_id = %user_id, item_id = id);
    Ok(Json(StatusResponse::ok()))
}
