//! Request extractors whose rejections render as [`ApiError`].

use super::error::ApiError;
use axum::extract::FromRequest;

/// JSON request body. A body that fails to parse is answered with the usual
/// `{"error", "message"}` shape instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
