//! Attraction management service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Attraction, AttractionPatch, NewAttraction};
use crate::domain::repositories::AttractionRepository;
use crate::error::AppError;

/// Maximum number of attractions returned by [`AttractionService::top_rated`].
pub const TOP_RATED_LIMIT: i64 = 5;

/// Service for managing attractions.
///
/// Ratings are never written here; they belong to the review workflow.
pub struct AttractionService<R: AttractionRepository> {
    repository: Arc<R>,
}

impl<R: AttractionRepository> AttractionService<R> {
    /// Creates a new attraction service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an attraction with a rating of 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is empty or the fee is negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_attraction(
        &self,
        new_attraction: NewAttraction,
    ) -> Result<Attraction, AppError> {
        new_attraction.validate()?;

        let attraction = self.repository.create(new_attraction).await?;
        tracing::info!(attraction_id = %attraction.id, name = %attraction.name, "Attraction created");

        Ok(attraction)
    }

    /// Retrieves an attraction by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the attraction does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_attraction(&self, id: Uuid) -> Result<Attraction, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_attractions(&self) -> Result<Vec<Attraction>, AppError> {
        self.repository.list().await
    }

    /// Returns the [`TOP_RATED_LIMIT`] best rated attractions, highest first.
    pub async fn top_rated(&self) -> Result<Vec<Attraction>, AppError> {
        self.repository.top_rated(TOP_RATED_LIMIT).await
    }

    /// Applies a partial update after validating the merged record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the attraction does not exist.
    /// Returns [`AppError::Validation`] if the merged record is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_attraction(
        &self,
        id: Uuid,
        patch: AttractionPatch,
    ) -> Result<Attraction, AppError> {
        let current = self.get_attraction(id).await?;

        let merged = patch.merge(&current);
        merged.validate()?;

        self.repository
            .update(id, merged)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an attraction and the reviews written about it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the attraction does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_attraction(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(attraction_id = %id, "Attraction deleted");
        Ok(())
    }

    /// Rebuilds every cached rating from stored reviews.
    pub async fn recompute_ratings(&self) -> Result<u64, AppError> {
        self.repository.recompute_ratings().await
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found("Attraction not found", json!({ "id": id }))
}
