use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{error, info};

use service::db::menu_service::{self, MenuItemPatch, NewMenuItem};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::menu_item::Model>>, JsonApiError> {
    match menu_service::list_menu_items(&state.db).await {
        Ok(items) => {
            info!(count = items.len(), "list menu items");
            Ok(Json(items))
        }
        Err(e) => {
            error!(err = %e, "list menu items failed");
            Err(e.into())
        }
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewMenuItem>,
) -> Result<(StatusCode, Json<serde_json::Value>), JsonApiError> {
    match menu_service::create_menu_item(&state.db, &input).await {
        Ok(id) => {
            info!(id, "created menu item");
            Ok((
                StatusCode::CREATED,
                Json(json!({"message": "Menu item added", "id": id})),
            ))
        }
        Err(e) => {
            error!(err = %e, "create menu item failed");
            Err(e.into())
        }
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<MenuItemPatch>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    match menu_service::update_menu_item(&state.db, id, &patch).await {
        Ok(()) => {
            info!(id, "updated menu item");
            Ok(Json(json!({"message": "Menu item updated"})))
        }
        Err(e) => {
            error!(err = %e, id, "update menu item failed");
            Err(e.into())
        }
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    match menu_service::delete_menu_item(&state.db, id).await {
        Ok(()) => {
            info!(id, "deleted menu item");
            Ok(Json(json!({"message": "Menu item deleted"})))
        }
        Err(e) => {
            error!(err = %e, id, "delete menu item failed");
            Err(e.into())
        }
    }
}
