//! `/orders`: CRUD plus the simulated `process-order` operation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};

use super::AppState;
use super::error::{ApiError, ErrorBody, MessageBody};
use super::extract::JsonBody;
use crate::domain::order::{Order, OrderFields};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order).get(list_orders))
        .route("/orders/process-order", get(process_order))
        .route("/orders/{id}", patch(update_order).delete(delete_order))
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    summary = "Create a new order",
    description = "Status defaults to `pending` when omitted.",
    request_body = OrderFields,
    responses(
        (status = 201, description = "Order created successfully", body = Order),
        (status = 400, description = "Invalid data provided", body = MessageBody),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<OrderFields>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state
        .orders
        .create(fields)
        .await
        .map_err(ApiError::bad_request)?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    summary = "Get all orders",
    responses(
        (status = 200, description = "A list of orders", body = [Order]),
        (status = 500, description = "Internal server error", body = MessageBody),
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.orders.find_all().await.map_err(ApiError::internal)?;
    Ok(Json(orders))
}

/// Any status may be written here, including moving a completed order back
/// to pending.
#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = "Orders",
    summary = "Update an order",
    params(("id" = String, Path, description = "The ID of the order to update")),
    request_body = OrderFields,
    responses(
        (status = 200, description = "The updated order, or null when the ID matches nothing", body = Option<Order>),
        (status = 400, description = "Invalid data provided", body = MessageBody),
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<OrderFields>,
) -> Result<Json<Option<Order>>, ApiError> {
    let order = state
        .orders
        .update(&id, fields)
        .await
        .map_err(ApiError::bad_request)?;
    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "Orders",
    summary = "Delete an order",
    params(("id" = String, Path, description = "The ID of the order to delete")),
    responses(
        (status = 200, description = "Order deleted successfully", body = MessageBody),
        (status = 400, description = "Invalid data provided", body = MessageBody),
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .orders
        .delete(&id)
        .await
        .map_err(ApiError::bad_request)?;
    Ok(Json(MessageBody::new("Order deleted")))
}

#[utoipa::path(
    get,
    path = "/orders/process-order",
    tag = "Orders",
    summary = "Process an order asynchronously",
    description = "Simulates a long-running order processing step.",
    responses(
        (status = 200, description = "Order processed successfully", body = MessageBody),
        (status = 500, description = "Something went wrong", body = ErrorBody),
    )
)]
pub async fn process_order(State(state): State<AppState>) -> Result<Json<MessageBody>, ApiError> {
    state
        .fulfillment
        .process_order()
        .await
        .map_err(|error| ApiError::failed(error, "Something went wrong"))?;
    Ok(Json(MessageBody::new("Order processed successfully!")))
}
