//! PostgreSQL implementation of review repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::rating::{lock_attractions, refresh_rating};
use super::rows::{REVIEW_COLUMNS, ReviewDetailsRow, ReviewRow};
use crate::domain::entities::{Attraction, NewReview, Review, ReviewDetails, Visitor};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

/// PostgreSQL repository for reviews.
///
/// Each write runs in one transaction:
///
/// 1. `SELECT ... FOR UPDATE` on the attraction row (an insert first takes
///    `FOR KEY SHARE` on the visitor row)
/// 2. insert or delete the review
/// 3. recompute and store the attraction's rating
///
/// Locks are taken visitor first, then attraction, the same order
/// [`super::PgVisitorRepository`] uses when deleting a visitor.
///
/// The unique index `reviews_attraction_visitor_key` rejects a second review
/// for the same pair even when two requests pass the service check together.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let mut tx = self.pool.begin().await?;

        // Blocks a concurrent visitor delete until this review is committed.
        let visitor = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM visitors WHERE id = $1 FOR KEY SHARE",
        )
        .bind(new_review.visitor_id)
        .fetch_optional(&mut *tx)
        .await?;

        if visitor.is_none() {
            tx.rollback().await?;
            return Err(AppError::precondition(
                "Visitor not found",
                json!({ "visitor": new_review.visitor_id }),
            ));
        }

        let locked = lock_attractions(&mut tx, &[new_review.attraction_id]).await?;
        if locked.is_empty() {
            tx.rollback().await?;
            return Err(AppError::precondition(
                "Attraction not found",
                json!({ "attraction": new_review.attraction_id }),
            ));
        }

        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            INSERT INTO reviews (attraction_id, visitor_id, score, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(new_review.attraction_id)
        .bind(new_review.visitor_id)
        .bind(new_review.score)
        .bind(&new_review.comment)
        .fetch_one(&mut *tx)
        .await?;

        let rating = refresh_rating(&mut tx, row.attraction_id).await?;

        tx.commit().await?;

        tracing::debug!(attraction_id = %row.attraction_id, rating, "Rating updated after insert");
        Ok(row.into())
    }

    async fn find_by_pair(
        &self,
        attraction_id: Uuid,
        visitor_id: Uuid,
    ) -> Result<Option<Review>, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            SELECT {REVIEW_COLUMNS}
            FROM reviews
            WHERE attraction_id = $1 AND visitor_id = $2
            "#
        ))
        .bind(attraction_id)
        .bind(visitor_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_detailed(&self) -> Result<Vec<ReviewDetails>, AppError> {
        let rows = sqlx::query_as::<_, ReviewDetailsRow>(
            r#"
            SELECT
                r.id, r.score, r.comment,
                a.id AS a_id, a.name AS a_name, a.location AS a_location,
                a.entry_fee AS a_entry_fee, a.rating AS a_rating,
                v.id AS v_id, v.name AS v_name, v.email AS v_email,
                v.visited_attractions AS v_visited_attractions
            FROM reviews r
            JOIN attractions a ON a.id = r.attraction_id
            JOIN visitors v ON v.id = r.visitor_id
            ORDER BY a.name, v.name, r.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ReviewDetails {
                id: r.id,
                attraction: Attraction {
                    id: r.a_id,
                    name: r.a_name,
                    location: r.a_location,
                    entry_fee: r.a_entry_fee,
                    rating: r.a_rating,
                },
                visitor: Visitor {
                    id: r.v_id,
                    name: r.v_name,
                    email: r.v_email,
                    visited_attractions: r.v_visited_attractions,
                },
                score: r.score,
                comment: r.comment,
            })
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Review>, AppError> {
        let mut tx = self.pool.begin().await?;

        let attraction_id = sqlx::query_scalar::<_, Uuid>(
            "SELECT attraction_id FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(attraction_id) = attraction_id else {
            tx.rollback().await?;
            return Ok(None);
        };

        lock_attractions(&mut tx, &[attraction_id]).await?;

        // Re-checked under the lock: a concurrent delete may have won.
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "DELETE FROM reviews WHERE id = $1 RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        let rating = refresh_rating(&mut tx, row.attraction_id).await?;

        tx.commit().await?;

        tracing::debug!(attraction_id = %row.attraction_id, rating, "Rating updated after delete");
        Ok(Some(row.into()))
    }
}
