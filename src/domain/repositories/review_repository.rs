//! Repository trait for review data access.

use crate::domain::entities::{NewReview, Review, ReviewDetails};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for reviews.
///
/// Every write also rewrites the rating of the affected attraction as
/// [`crate::domain::rating::average_rating`] of its remaining scores. Both
/// writes happen in one transaction, serialized per attraction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts a review and recomputes the attraction's rating, counting the
    /// new review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the visitor already reviewed the attraction.
    /// Returns [`AppError::Precondition`] if the visitor or the attraction no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError>;

    /// Finds the review a visitor wrote for an attraction, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_pair(
        &self,
        attraction_id: Uuid,
        visitor_id: Uuid,
    ) -> Result<Option<Review>, AppError>;

    /// Lists all reviews with attraction and visitor resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_detailed(&self) -> Result<Vec<ReviewDetails>, AppError>;

    /// Deletes a review and recomputes its attraction's rating, which becomes
    /// 0 when no reviews remain.
    ///
    /// Returns the deleted review, or `Ok(None)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<Option<Review>, AppError>;
}
