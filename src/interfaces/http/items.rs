//! `/items`: create, list, update, replace and delete catalogue items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{patch, post};
use axum::{Json, Router};

use super::AppState;
use super::error::{ApiError, MessageBody};
use super::extract::JsonBody;
use crate::domain::item::{Item, ItemFields};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(create_item).get(list_items))
        .route(
            "/items/{id}",
            patch(update_item).put(replace_item).delete(delete_item),
        )
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    summary = "Create a new item",
    request_body = ItemFields,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, description = "Bad request", body = MessageBody),
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<ItemFields>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state
        .items
        .create(fields)
        .await
        .map_err(ApiError::bad_request)?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    summary = "Get all items",
    responses(
        (status = 200, description = "A list of items", body = [Item]),
        (status = 500, description = "Internal server error", body = MessageBody),
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.find_all().await.map_err(ApiError::internal)?;
    Ok(Json(items))
}

#[utoipa::path(
    patch,
    path = "/items/{id}",
    tag = "Items",
    summary = "Update an item",
    params(("id" = String, Path, description = "The ID of the item to update")),
    request_body = ItemFields,
    responses(
        (status = 200, description = "The updated item, or null when the ID matches nothing", body = Option<Item>),
        (status = 400, description = "Bad request", body = MessageBody),
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<ItemFields>,
) -> Result<Json<Option<Item>>, ApiError> {
    let item = state
        .items
        .update(&id, fields)
        .await
        .map_err(ApiError::bad_request)?;
    Ok(Json(item))
}

/// Same merge as `PATCH`; fields absent from the body are kept.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    summary = "Replace an item",
    params(("id" = String, Path, description = "The ID of the item to replace")),
    request_body = ItemFields,
    responses(
        (status = 200, description = "The updated item, or null when the ID matches nothing", body = Option<Item>),
        (status = 400, description = "Bad request", body = MessageBody),
    )
)]
pub async fn replace_item(
    state: State<AppState>,
    id: Path<String>,
    fields: JsonBody<ItemFields>,
) -> Result<Json<Option<Item>>, ApiError> {
    update_item(state, id, fields).await
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    summary = "Delete an item",
    params(("id" = String, Path, description = "The ID of the item to delete")),
    responses(
        (status = 200, description = "Item deleted successfully", body = MessageBody),
        (status = 400, description = "Bad request", body = MessageBody),
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .items
        .delete(&id)
        .await
        .map_err(ApiError::bad_request)?;
    Ok(Json(MessageBody::new("Item deleted")))
}
