//! Request extractors with API-shaped rejections.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Malformed bodies answer 400 with `{ "error": ... }` instead of axum's
/// plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
