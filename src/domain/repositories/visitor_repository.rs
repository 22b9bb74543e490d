//! Repository trait for visitor data access.

use crate::domain::entities::{NewVisitor, Visitor, VisitorActivity};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing visitors.
///
/// Email addresses are unique across visitors; storage enforces this with a
/// unique index in addition to the service-level check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Creates a visitor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_visitor: NewVisitor) -> Result<Visitor, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Visitor>, AppError>;

    /// Finds a visitor by exact (case-sensitive) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Visitor>, AppError>;

    /// Lists all visitors ordered by name.
    async fn list(&self) -> Result<Vec<Visitor>, AppError>;

    /// Lists every visitor with the number of reviews they wrote.
    async fn activity(&self) -> Result<Vec<VisitorActivity>, AppError>;

    /// Replaces all visitor fields.
    ///
    /// Returns `Ok(None)` if the visitor does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email belongs to another visitor.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: Uuid, fields: NewVisitor) -> Result<Option<Visitor>, AppError>;

    /// Deletes a visitor and their reviews, recomputing the rating of every
    /// attraction that lost a review.
    ///
    /// Returns `false` if the visitor does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
