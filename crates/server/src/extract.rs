use axum::extract::FromRequest;

use crate::errors::JsonApiError;

/// Request body extractor; malformed or mistyped JSON is rejected with a
/// 400 `JsonApiError` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct JsonBody<T>(pub T);
