//! Identifier parsing for path parameters.

use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// Parses a path identifier.
///
/// A string that is not a valid ID cannot name any record, so it is reported
/// as `"{entity} not found"` rather than as a validation failure.
pub fn parse_path_id(raw: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::not_found(format!("{entity} not found"), json!({ "id": raw })))
}
