//! Review service enforcing the visit and uniqueness rules.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{Review, ReviewDetails, ReviewSubmission};
use crate::domain::repositories::{ReviewRepository, VisitorRepository};
use crate::error::AppError;

/// Service for creating, listing and deleting reviews.
///
/// A visitor may review an attraction only after visiting it, and only once.
/// Rating maintenance is delegated to [`ReviewRepository`], which rewrites the
/// attraction's rating in the same transaction as the review itself.
pub struct ReviewService<R: ReviewRepository, V: VisitorRepository> {
    review_repository: Arc<R>,
    visitor_repository: Arc<V>,
}

impl<R: ReviewRepository, V: VisitorRepository> ReviewService<R, V> {
    /// Creates a new review service.
    pub fn new(review_repository: Arc<R>, visitor_repository: Arc<V>) -> Self {
        Self {
            review_repository,
            visitor_repository,
        }
    }

    /// Creates a review and refreshes the attraction's rating.
    ///
    /// Checks run in order and the first failure is returned:
    ///
    /// 1. Both references present and well-formed, score an integer in 1..=5
    /// 2. The visitor exists and has visited the attraction
    /// 3. The visitor has not reviewed the attraction yet
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if step 1 fails.
    /// Returns [`AppError::Precondition`] if step 2 fails.
    /// Returns [`AppError::Conflict`] if step 3 fails, including when a
    /// concurrent request wins the race at the storage layer.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_review(&self, submission: ReviewSubmission) -> Result<Review, AppError> {
        let new_review = submission.into_new_review()?;

        let visited = self
            .visitor_repository
            .find_by_id(new_review.visitor_id)
            .await?
            .is_some_and(|visitor| visitor.has_visited(new_review.attraction_id));

        if !visited {
            return Err(AppError::precondition(
                "Visitor has not visited this attraction",
                json!({
                    "attraction": new_review.attraction_id,
                    "visitor": new_review.visitor_id,
                }),
            ));
        }

        if self
            .review_repository
            .find_by_pair(new_review.attraction_id, new_review.visitor_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Visitor has already reviewed this attraction",
                json!({
                    "attraction": new_review.attraction_id,
                    "visitor": new_review.visitor_id,
                }),
            ));
        }

        let review = self.review_repository.create(new_review).await?;

        tracing::info!(
            review_id = %review.id,
            attraction_id = %review.attraction_id,
            visitor_id = %review.visitor_id,
            score = review.score,
            "Review created"
        );

        Ok(review)
    }

    /// Lists all reviews with attraction and visitor resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_reviews(&self) -> Result<Vec<ReviewDetails>, AppError> {
        self.review_repository.list_detailed().await
    }

    /// Deletes a review and refreshes the attraction's rating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_review(&self, id: Uuid) -> Result<Review, AppError> {
        let review = self
            .review_repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found", json!({ "id": id })))?;

        tracing::info!(
            review_id = %review.id,
            attraction_id = %review.attraction_id,
            "Review deleted"
        );

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewReview, Visitor};
    use crate::domain::repositories::{MockReviewRepository, MockVisitorRepository};

    fn create_test_visitor(id: Uuid, visited: Vec<Uuid>) -> Visitor {
        Visitor {
            id,
            name: "Test Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            visited_attractions: visited,
        }
    }

    fn create_test_review(attraction_id: Uuid, visitor_id: Uuid, score: i16) -> Review {
        Review {
            id: Uuid::new_v4(),
            attraction_id,
            visitor_id,
            score,
            comment: None,
        }
    }

    fn submission(attraction_id: Uuid, visitor_id: Uuid, score: f64) -> ReviewSubmission {
        ReviewSubmission {
            attraction: Some(attraction_id.to_string()),
            visitor: Some(visitor_id.to_string()),
            score: Some(score),
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_create_review_success() {
        let attraction_id = Uuid::new_v4();
        let visitor_id = Uuid::new_v4();

        let mut mock_visitors = MockVisitorRepository::new();
        let visitor = create_test_visitor(visitor_id, vec![attraction_id]);
        mock_visitors
            .expect_find_by_id()
            .withf(move |id| *id == visitor_id)
            .times(1)
            .returning(move |_| Ok(Some(visitor.clone())));

        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews
            .expect_find_by_pair()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_reviews
            .expect_create()
            .withf(move |new: &NewReview| {
                new.attraction_id == attraction_id && new.visitor_id == visitor_id && new.score == 4
            })
            .times(1)
            .returning(|new| Ok(create_test_review(new.attraction_id, new.visitor_id, new.score)));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_visitors));

        let review = service
            .create_review(submission(attraction_id, visitor_id, 4.0))
            .await
            .unwrap();

        assert_eq!(review.score, 4);
        assert_eq!(review.attraction_id, attraction_id);
    }

    #[tokio::test]
    async fn test_create_review_invalid_score_checked_first() {
        // No repository expectations: validation must fail before any lookup.
        let service = ReviewService::new(
            Arc::new(MockReviewRepository::new()),
            Arc::new(MockVisitorRepository::new()),
        );

        let result = service
            .create_review(submission(Uuid::new_v4(), Uuid::new_v4(), 7.0))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_review_missing_visitor_reference() {
        let service = ReviewService::new(
            Arc::new(MockReviewRepository::new()),
            Arc::new(MockVisitorRepository::new()),
        );

        let result = service
            .create_review(ReviewSubmission {
                attraction: Some(Uuid::new_v4().to_string()),
                visitor: None,
                score: Some(3.0),
                comment: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_review_not_visited() {
        let attraction_id = Uuid::new_v4();
        let visitor_id = Uuid::new_v4();

        let mut mock_visitors = MockVisitorRepository::new();
        let visitor = create_test_visitor(visitor_id, vec![Uuid::new_v4()]);
        mock_visitors
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(visitor.clone())));

        let service = ReviewService::new(Arc::new(MockReviewRepository::new()), Arc::new(mock_visitors));

        let err = service
            .create_review(submission(attraction_id, visitor_id, 3.0))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Precondition { .. }));
        assert_eq!(err.to_string(), "Visitor has not visited this attraction");
    }

    #[tokio::test]
    async fn test_create_review_unknown_visitor() {
        let mut mock_visitors = MockVisitorRepository::new();
        mock_visitors
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ReviewService::new(Arc::new(MockReviewRepository::new()), Arc::new(mock_visitors));

        let result = service
            .create_review(submission(Uuid::new_v4(), Uuid::new_v4(), 3.0))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Precondition { .. }));
    }

    #[tokio::test]
    async fn test_create_review_duplicate() {
        let attraction_id = Uuid::new_v4();
        let visitor_id = Uuid::new_v4();

        let mut mock_visitors = MockVisitorRepository::new();
        let visitor = create_test_visitor(visitor_id, vec![attraction_id]);
        mock_visitors
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(visitor.clone())));

        let mut mock_reviews = MockReviewRepository::new();
        let existing = create_test_review(attraction_id, visitor_id, 4);
        mock_reviews
            .expect_find_by_pair()
            .withf(move |a, v| *a == attraction_id && *v == visitor_id)
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));
        mock_reviews.expect_create().never();

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_visitors));

        let err = service
            .create_review(submission(attraction_id, visitor_id, 5.0))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "Visitor has already reviewed this attraction");
    }

    #[tokio::test]
    async fn test_create_review_storage_conflict_passes_through() {
        let attraction_id = Uuid::new_v4();
        let visitor_id = Uuid::new_v4();

        let mut mock_visitors = MockVisitorRepository::new();
        let visitor = create_test_visitor(visitor_id, vec![attraction_id]);
        mock_visitors
            .expect_find_by_id()
            .returning(move |_| Ok(Some(visitor.clone())));

        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews.expect_find_by_pair().returning(|_, _| Ok(None));
        mock_reviews.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Visitor has already reviewed this attraction",
                json!({}),
            ))
        });

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(mock_visitors));

        let result = service
            .create_review(submission(attraction_id, visitor_id, 2.0))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_delete_review_success() {
        let review = create_test_review(Uuid::new_v4(), Uuid::new_v4(), 5);
        let review_id = review.id;

        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews
            .expect_delete()
            .withf(move |id| *id == review_id)
            .times(1)
            .returning(move |_| Ok(Some(review.clone())));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(MockVisitorRepository::new()));

        let deleted = service.delete_review(review_id).await.unwrap();
        assert_eq!(deleted.id, review_id);
    }

    #[tokio::test]
    async fn test_delete_review_not_found() {
        let mut mock_reviews = MockReviewRepository::new();
        mock_reviews.expect_delete().times(1).returning(|_| Ok(None));

        let service = ReviewService::new(Arc::new(mock_reviews), Arc::new(MockVisitorRepository::new()));

        let result = service.delete_review(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
