//! Repository trait for attraction data access.

use crate::domain::entities::{Attraction, NewAttraction};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing attractions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAttractionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_attraction.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttractionRepository: Send + Sync {
    /// Creates an attraction with a rating of 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_attraction: NewAttraction) -> Result<Attraction, AppError>;

    /// Finds an attraction by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attraction>, AppError>;

    /// Lists all attractions ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Attraction>, AppError>;

    /// Lists up to `limit` attractions by rating, highest first.
    ///
    /// Ties are ordered by name, then ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_rated(&self, limit: i64) -> Result<Vec<Attraction>, AppError>;

    /// Replaces the client-editable fields. The rating is left untouched.
    ///
    /// Returns `Ok(None)` if the attraction does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: Uuid,
        fields: NewAttraction,
    ) -> Result<Option<Attraction>, AppError>;

    /// Deletes an attraction together with its reviews and removes it from
    /// every visitor's history.
    ///
    /// Returns `false` if the attraction does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Recomputes every attraction's rating from its reviews.
    ///
    /// Returns the number of attractions processed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recompute_ratings(&self) -> Result<u64, AppError>;
}
