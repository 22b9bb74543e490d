//! Handlers for review endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::review::{CreateReviewRequest, ReviewDetailsItem, ReviewItem};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::ids::parse_path_id;

/// Creates a review and refreshes the attraction's rating.
///
/// # Endpoint
///
/// `POST /api/reviews`
///
/// # Request Body
///
/// ```json
/// { "attraction": "<id>", "visitor": "<id>", "score": 4, "comment": "Great view" }
/// ```
///
/// # Errors
///
/// All answer 400:
/// - missing reference or score outside 1..=5
/// - the visitor has not visited the attraction
/// - the visitor already reviewed the attraction
pub async fn create_review_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewItem>), AppError> {
    let review = state.review_service.create_review(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Lists all reviews with attraction and visitor expanded.
///
/// # Endpoint
///
/// `GET /api/reviews`
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewDetailsItem>>, AppError> {
    let reviews = state.review_service.list_reviews().await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// Deletes a review and refreshes the attraction's rating.
///
/// # Endpoint
///
/// `DELETE /api/reviews/{id}`
///
/// When the last review of an attraction is removed its rating becomes 0.
///
/// # Errors
///
/// Returns 404 if the review does not exist.
pub async fn delete_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_path_id(&id, "Review")?;
    state.review_service.delete_review(id).await?;
    Ok(Json(MessageResponse::new("Review deleted successfully")))
}
