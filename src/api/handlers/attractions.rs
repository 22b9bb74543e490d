//! Handlers for attraction endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::attraction::{
    AttractionItem, CreateAttractionRequest, UpdateAttractionRequest,
};
use crate::api::dto::message::MessageResponse;
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ids::parse_path_id;

const ENTITY: &str = "Attraction";

/// Creates an attraction. Its rating starts at 0.
///
/// # Endpoint
///
/// `POST /api/attractions`
///
/// # Request Body
///
/// ```json
/// { "name": "Eiffel Tower", "location": "Paris", "entryFee": 25 }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is missing, empty, or the fee is negative.
pub async fn create_attraction_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAttractionRequest>,
) -> Result<(StatusCode, Json<AttractionItem>), AppError> {
    payload.validate()?;

    let attraction = state
        .attraction_service
        .create_attraction(payload.into_new_attraction())
        .await?;

    Ok((StatusCode::CREATED, Json(attraction.into())))
}

/// Lists all attractions.
///
/// # Endpoint
///
/// `GET /api/attractions`
pub async fn list_attractions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttractionItem>>, AppError> {
    let attractions = state.attraction_service.list_attractions().await?;
    Ok(Json(attractions.into_iter().map(Into::into).collect()))
}

/// Lists the five best rated attractions, highest rating first.
///
/// # Endpoint
///
/// `GET /api/attractions/top-rated`
///
/// Ties are ordered by name.
pub async fn top_rated_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttractionItem>>, AppError> {
    let attractions = state.attraction_service.top_rated().await?;
    Ok(Json(attractions.into_iter().map(Into::into).collect()))
}

/// Retrieves one attraction.
///
/// # Endpoint
///
/// `GET /api/attractions/{id}`
///
/// # Errors
///
/// Returns 404 if the attraction does not exist.
pub async fn get_attraction_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AttractionItem>, AppError> {
    let id = parse_path_id(&id, ENTITY)?;
    let attraction = state.attraction_service.get_attraction(id).await?;
    Ok(Json(attraction.into()))
}

/// Partially updates an attraction.
///
/// # Endpoint
///
/// `PUT /api/attractions/{id}`
///
/// Only provided fields change; the merged record is validated again.
///
/// # Errors
///
/// Returns 404 if the attraction does not exist.
/// Returns 400 if the merged record is invalid.
pub async fn update_attraction_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateAttractionRequest>,
) -> Result<Json<AttractionItem>, AppError> {
    let id = parse_path_id(&id, ENTITY)?;
    let attraction = state
        .attraction_service
        .update_attraction(id, payload.into())
        .await?;
    Ok(Json(attraction.into()))
}

/// Deletes an attraction along with its reviews.
///
/// # Endpoint
///
/// `DELETE /api/attractions/{id}`
///
/// # Errors
///
/// Returns 404 if the attraction does not exist.
pub async fn delete_attraction_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_path_id(&id, ENTITY)?;
    state.attraction_service.delete_attraction(id).await?;
    Ok(Json(MessageResponse::new("Attraction deleted successfully")))
}
