//! `/payments`: settles an order by marking it completed.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::http::header;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::AppState;
use super::error::{ApiError, ErrorBody};
use crate::domain::order::Order;
use crate::error::ServiceError;

const PAYMENT_FAILED: &str = "Payment failed";

pub fn routes() -> Router<AppState> {
    Router::new().route("/payments", post(process_payment))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// The order being paid for. Anything other than a string fails to
    /// cast to an order id.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "0195d4e2-7e21-7665-9571-5e81c14a2b3c")]
    pub order_id: Option<Value>,
}

impl PaymentRequest {
    /// The id as the store sees it. Non-string values keep their JSON text,
    /// which never parses as a record id.
    fn order_id(&self) -> Option<String> {
        self.order_id.as_ref().map(|value| match value {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        })
    }
}

/// Body of a payment request.
///
/// A request without a JSON body is an empty request. A body that does not
/// decode fails with the payment error envelope.
pub struct PaymentBody(pub PaymentRequest);

impl<S: Send + Sync> FromRequest<S> for PaymentBody {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::failed(ServiceError::Internal(rejection.body_text()), PAYMENT_FAILED)
        })?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(PaymentRequest::default()));
        }
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|error| ApiError::failed(error.into(), PAYMENT_FAILED))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentReceipt {
    #[schema(example = "Payment processed successfully!")]
    pub message: String,
    /// The updated order, or null when the ID matches nothing.
    pub order: Option<Order>,
}

#[utoipa::path(
    post,
    path = "/payments",
    tag = "Payments",
    summary = "Processes a payment for an order",
    description = "Simulates the processing of a payment for an order and updates its status to 'completed'.",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment processed successfully and order status updated", body = PaymentReceipt),
        (status = 500, description = "Payment processing failed", body = ErrorBody),
    )
)]
pub async fn process_payment(
    State(state): State<AppState>,
    PaymentBody(request): PaymentBody,
) -> Result<Json<PaymentReceipt>, ApiError> {
    let order = state
        .fulfillment
        .process_payment(request.order_id().as_deref())
        .await
        .map_err(|error| ApiError::failed(error, PAYMENT_FAILED))?;
    Ok(Json(PaymentReceipt {
        message: "Payment processed successfully!".to_string(),
        order,
    }))
}
