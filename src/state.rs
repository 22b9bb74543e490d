//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AttractionService, ReviewService, VisitorService};
use crate::infrastructure::persistence::{
    PgAttractionRepository, PgReviewRepository, PgVisitorRepository,
};

/// Services wired to their PostgreSQL repositories.
///
/// Cloned per request; every field is an `Arc`, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    pub attraction_service: Arc<AttractionService<PgAttractionRepository>>,
    pub visitor_service: Arc<VisitorService<PgVisitorRepository>>,
    pub review_service: Arc<ReviewService<PgReviewRepository, PgVisitorRepository>>,
    pub pool: Arc<PgPool>,
}

impl AppState {
    /// Builds repositories and services on top of one connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let attraction_repo = Arc::new(PgAttractionRepository::new(pool.clone()));
        let visitor_repo = Arc::new(PgVisitorRepository::new(pool.clone()));
        let review_repo = Arc::new(PgReviewRepository::new(pool.clone()));

        Self {
            attraction_service: Arc::new(AttractionService::new(attraction_repo)),
            visitor_service: Arc::new(VisitorService::new(visitor_repo.clone())),
            review_service: Arc::new(ReviewService::new(review_repo, visitor_repo)),
            pool,
        }
    }
}
