//! Handlers for visitor endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::visitor::{
    CreateVisitorRequest, UpdateVisitorRequest, VisitorActivityItem, VisitorItem,
};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ids::parse_path_id;

const ENTITY: &str = "Visitor";

/// Registers a visitor.
///
/// # Endpoint
///
/// `POST /api/visitors`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "visitedAttractions": ["6f1c..."]   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is invalid or the email is already registered.
pub async fn create_visitor_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateVisitorRequest>,
) -> Result<(StatusCode, Json<VisitorItem>), AppError> {
    payload.validate()?;

    let visitor = state
        .visitor_service
        .create_visitor(payload.into_new_visitor())
        .await?;

    Ok((StatusCode::CREATED, Json(visitor.into())))
}

/// Lists all visitors.
///
/// # Endpoint
///
/// `GET /api/visitors`
pub async fn list_visitors_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VisitorItem>>, AppError> {
    let visitors = state.visitor_service.list_visitors().await?;
    Ok(Json(visitors.into_iter().map(Into::into).collect()))
}

/// Lists visitors with the number of reviews each one wrote.
///
/// # Endpoint
///
/// `GET /api/visitors/activity`
///
/// # Response
///
/// ```json
/// [{ "id": "...", "name": "Ada", "email": "ada@example.com", "reviewCount": 2 }]
/// ```
pub async fn visitor_activity_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VisitorActivityItem>>, AppError> {
    let activity = state.visitor_service.activity().await?;
    Ok(Json(activity.into_iter().map(Into::into).collect()))
}

/// Retrieves one visitor.
///
/// # Endpoint
///
/// `GET /api/visitors/{id}`
pub async fn get_visitor_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<VisitorItem>, AppError> {
    let id = parse_path_id(&id, ENTITY)?;
    let visitor = state.visitor_service.get_visitor(id).await?;
    Ok(Json(visitor.into()))
}

/// Partially updates a visitor.
///
/// # Endpoint
///
/// `PUT /api/visitors/{id}`
///
/// # Errors
///
/// Returns 404 if the visitor does not exist.
/// Returns 400 if the merged record is invalid or the email is taken.
pub async fn update_visitor_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateVisitorRequest>,
) -> Result<Json<VisitorItem>, AppError> {
    let id = parse_path_id(&id, ENTITY)?;
    let visitor = state
        .visitor_service
        .update_visitor(id, payload.into())
        .await?;
    Ok(Json(visitor.into()))
}

/// Deletes a visitor along with their reviews.
///
/// # Endpoint
///
/// `DELETE /api/visitors/{id}`
///
/// Ratings of the attractions they reviewed are recomputed.
pub async fn delete_visitor_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_path_id(&id, ENTITY)?;
    state.visitor_service.delete_visitor(id).await?;
    Ok(Json(MessageResponse::new("Visitor deleted successfully")))
}
