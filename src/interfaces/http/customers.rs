//! `/customers`: create, update and delete. There is no listing endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{patch, post};
use axum::{Json, Router};

use super::AppState;
use super::error::{ApiError, MessageBody};
use super::extract::JsonBody;
use crate::domain::customer::{Customer, CustomerFields};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(create_customer))
        .route(
            "/customers/{id}",
            patch(update_customer).delete(delete_customer),
        )
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    summary = "Create a new customer",
    request_body = CustomerFields,
    responses(
        (status = 201, description = "Customer created successfully", body = Customer),
        (status = 400, description = "A required field is missing", body = MessageBody),
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<CustomerFields>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state
        .customers
        .create(fields)
        .await
        .map_err(ApiError::bad_request)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    patch,
    path = "/customers/{id}",
    tag = "Customers",
    summary = "Update a customer",
    params(("id" = String, Path, description = "The ID of the customer to update")),
    request_body = CustomerFields,
    responses(
        (status = 200, description = "The updated customer, or null when the ID matches nothing", body = Option<Customer>),
        (status = 400, description = "Invalid ID or error occurred", body = MessageBody),
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<CustomerFields>,
) -> Result<Json<Option<Customer>>, ApiError> {
    let customer = state
        .customers
        .update(&id, fields)
        .await
        .map_err(ApiError::bad_request)?;
    Ok(Json(customer))
}

/// Orders referencing the customer are left untouched.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customers",
    summary = "Delete a customer",
    params(("id" = String, Path, description = "The ID of the customer to delete")),
    responses(
        (status = 200, description = "Customer deleted successfully", body = MessageBody),
        (status = 400, description = "Invalid ID or error occurred", body = MessageBody),
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state
        .customers
        .delete(&id)
        .await
        .map_err(ApiError::bad_request)?;
    Ok(Json(MessageBody::new("Customer deleted")))
}
