//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAttractionRepository`] - Attraction storage and rating queries
//! - [`PgVisitorRepository`] - Visitor storage and activity aggregate
//! - [`PgReviewRepository`] - Transactional review writes

pub mod pg_attraction_repository;
pub mod pg_review_repository;
pub mod pg_visitor_repository;
mod rating;
mod rows;

pub use pg_attraction_repository::PgAttractionRepository;
pub use pg_review_repository::PgReviewRepository;
pub use pg_visitor_repository::PgVisitorRepository;

use sqlx::PgPool;

/// Round-trips a trivial query to confirm the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}
