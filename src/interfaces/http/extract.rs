use axum::extract::FromRequest;

use super::error::ApiError;

/// `axum::Json`, with rejections answered as a 400 `{"message": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
