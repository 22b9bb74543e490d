//! Visitor management service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{NewVisitor, Visitor, VisitorActivity, VisitorPatch};
use crate::domain::repositories::VisitorRepository;
use crate::error::AppError;

/// Service for managing visitors.
///
/// Email addresses are unique and compared exactly, so `Ada@x.com` and
/// `ada@x.com` are different visitors.
pub struct VisitorService<R: VisitorRepository> {
    repository: Arc<R>,
}

impl<R: VisitorRepository> VisitorService<R> {
    /// Creates a new visitor service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a visitor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty or the email is malformed.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_visitor(&self, new_visitor: NewVisitor) -> Result<Visitor, AppError> {
        new_visitor.validate()?;

        if self
            .repository
            .find_by_email(&new_visitor.email)
            .await?
            .is_some()
        {
            return Err(email_taken(&new_visitor.email));
        }

        let visitor = self.repository.create(new_visitor).await?;
        tracing::info!(visitor_id = %visitor.id, "Visitor created");

        Ok(visitor)
    }

    /// Retrieves a visitor by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the visitor does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_visitor(&self, id: Uuid) -> Result<Visitor, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_visitors(&self) -> Result<Vec<Visitor>, AppError> {
        self.repository.list().await
    }

    /// Lists every visitor with their review count.
    pub async fn activity(&self) -> Result<Vec<VisitorActivity>, AppError> {
        self.repository.activity().await
    }

    /// Applies a partial update after validating the merged record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the visitor does not exist.
    /// Returns [`AppError::Validation`] if the merged record is invalid.
    /// Returns [`AppError::Conflict`] if the new email belongs to another visitor.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_visitor(&self, id: Uuid, patch: VisitorPatch) -> Result<Visitor, AppError> {
        let current = self.get_visitor(id).await?;

        let merged = patch.merge(&current);
        merged.validate()?;

        if merged.email != current.email
            && let Some(other) = self.repository.find_by_email(&merged.email).await?
            && other.id != id
        {
            return Err(email_taken(&merged.email));
        }

        self.repository
            .update(id, merged)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a visitor and their reviews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the visitor does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_visitor(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(visitor_id = %id, "Visitor deleted");
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found("Visitor not found", json!({ "id": id }))
}

fn email_taken(email: &str) -> AppError {
    AppError::conflict("Email already registered", json!({ "email": email }))
}
