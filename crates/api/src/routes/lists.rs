//! List endpoints
//!
//! # Auth Requirements
//!
//! | Endpoint | Notes |
//! |----------|-------|
//! | `POST /api/lists` | Create list owned by caller |
//! | `GET /api/lists` | Caller's lists, `{ "data": [...] }` |
//! | `GET /api/lists/{id}` | 404 unless caller owns it |
//! | `PUT /api/lists/{id}` | Partial update |
//! | `DELETE /api/lists/{id}` | Removes the list and its items |
//! | `POST /api/lists/{id}/items` | Create item in an owned list |
//! | `GET /api/lists/{id}/items` | Items of an owned list, bare array |

use axum::{Json, Router, extract::State, routing::get};

use tasks_store::{ListId, NewItem, NewList, TodoItem, TodoList, UpdateListInput};

use crate::audit::AuditAction;
use crate::auth::AuthUser;
use crate::error::Result;
use crate::extract::{ApiJson, IdParam};
use crate::state::AppState;
use crate::types::{ApiResponse, IdResponse, StatusResponse};

/// List routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/lists", get(get_all_lists).post(create_list))
        .route(
            "/api/lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        .route(
            "/api/lists/{id}/items",
            get(get_all_items).post(create_item),
        )
}

// =============================================================================
// Lists
// =============================================================================

/// POST /api/lists
async fn create_list(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewList>,
) -> Result<Json<IdResponse>> {
    let id = state.lists.create(user_id, req).await?;

    crate::audit!(AuditAction::ListCreate, user_id = %user_id, list_id = %id);
    Ok(Json(IdResponse::new(id)))
}

/// GET /api/lists
async fn get_all_lists(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TodoList>>>> {
    let lists = state.lists.get_all(user_id).await?;
    Ok(Json(ApiResponse::new(lists)))
}

/// GET /api/lists/{id}
async fn get_list(
    AuthUser(user_id): AuthUser,
    IdParam(id): IdParam,
    State(state): State<AppState>,
) -> Result<Json<TodoList>> {
    let list = state.lists.get_by_id(user_id, ListId(id)).await?;
    Ok(Json(list))
}

/// PUT /api/lists/{id}
async fn update_list(
    AuthUser(user_id): AuthUser,
    IdParam(id): IdParam,
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateListInput>,
) -> Result<Json<StatusResponse>> {
    state.lists.update(user_id, ListId(id), req).await?;

    crate::audit!(AuditAction::ListUpdate, user_id = %user_id, list_id = id);
    Ok(Json(StatusResponse::ok()))
}

/// DELETE /api/lists/{id}
async fn delete_list(
    AuthUser(user_id): AuthUser,
    IdParam(id): IdParam,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>> {
    state.lists.delete(user_id, ListId(id)).await?;

    crate::audit!(AuditAction::ListDelete, user_id = %user_id, list_id = id);
    Ok(Json(StatusResponse::ok()))
}

// =============================================================================
// Items of a list
// =============================================================================

/// POST /api/lists/{id}/items
async fn create_item(
    AuthUser(user_id): AuthUser,
    IdParam(list_id): IdParam,
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewItem>,
) -> Result<Json<IdResponse>> {
    let id = state.items.create(user_id, ListId(list_id), req).await?;

    crate::audit!(
        AuditAction::ItemCreate,
        user_id = %user_id,
        list_id = list_id,
        item_id = %id
    );
    Ok(Json(IdResponse::new(id)))
}

/// GET /api/lists/{id}/items
async fn get_all_items(
    AuthUser(user_id): AuthUser,
    IdParam(list_id): IdParam,
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoItem>>> {
    let items = state.items.get_all(user_id, ListId(list_id)).await?;
    Ok(Json(items))
}
