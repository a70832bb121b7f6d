//! Error envelopes and their HTTP mapping.
//!
//! Resource handlers answer failures with `{"message": ...}`; the simulated
//! operations (order processing, payment) answer with `{"error": ...}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ServiceError;

/// `{"message": ...}`, used for confirmations and resource errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": ...}`, used by the simulated operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    Message(StatusCode, MessageBody),
    Error(StatusCode, ErrorBody),
}

impl ApiError {
    /// 400 with the store's message. Used for create, update and delete.
    pub fn bad_request(error: ServiceError) -> Self {
        tracing::warn!(%error, "Request rejected");
        Self::Message(StatusCode::BAD_REQUEST, MessageBody::new(error.to_string()))
    }

    /// 500 with the store's message. Used for listing.
    pub fn internal(error: ServiceError) -> Self {
        tracing::error!(%error, "Listing failed");
        Self::Message(
            StatusCode::INTERNAL_SERVER_ERROR,
            MessageBody::new(error.to_string()),
        )
    }

    /// 500 with a fixed `{"error": ...}` payload; the cause is only logged.
    pub fn failed(error: ServiceError, summary: &str) -> Self {
        tracing::error!(%error, summary, "Simulated operation failed");
        Self::Error(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody {
                error: summary.to_string(),
            },
        )
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(%rejection, "Malformed request body");
        Self::Message(StatusCode::BAD_REQUEST, MessageBody::new(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Message(status, body) => (status, Json(body)).into_response(),
            ApiError::Error(status, body) => (status, Json(body)).into_response(),
        }
    }
}
