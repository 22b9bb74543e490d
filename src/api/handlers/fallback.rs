//! Fallbacks for requests no route accepts.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths, and known paths hit with an unsupported method,
/// with the regular JSON error body.
pub async fn route_not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "Route not found",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
