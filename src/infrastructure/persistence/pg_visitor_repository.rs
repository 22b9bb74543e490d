//! PostgreSQL implementation of visitor repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::rating::{lock_attractions, refresh_rating};
use super::rows::{VISITOR_COLUMNS, VisitorActivityRow, VisitorRow};
use crate::domain::entities::{NewVisitor, Visitor, VisitorActivity};
use crate::domain::repositories::VisitorRepository;
use crate::error::AppError;

/// PostgreSQL repository for visitors.
///
/// `visited_attractions` is stored as a `UUID[]` column so the client's order
/// (and any duplicates) round-trip unchanged.
pub struct PgVisitorRepository {
    pool: Arc<PgPool>,
}

impl PgVisitorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitorRepository for PgVisitorRepository {
    async fn create(&self, new_visitor: NewVisitor) -> Result<Visitor, AppError> {
        let row = sqlx::query_as::<_, VisitorRow>(&format!(
            r#"
            INSERT INTO visitors (name, email, visited_attractions)
            VALUES ($1, $2, $3)
            RETURNING {VISITOR_COLUMNS}
            "#
        ))
        .bind(&new_visitor.name)
        .bind(&new_visitor.email)
        .bind(&new_visitor.visited_attractions)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Visitor>, AppError> {
        let row = sqlx::query_as::<_, VisitorRow>(&format!(
            "SELECT {VISITOR_COLUMNS} FROM visitors WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Visitor>, AppError> {
        let row = sqlx::query_as::<_, VisitorRow>(&format!(
            "SELECT {VISITOR_COLUMNS} FROM visitors WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Visitor>, AppError> {
        let rows = sqlx::query_as::<_, VisitorRow>(&format!(
            "SELECT {VISITOR_COLUMNS} FROM visitors ORDER BY name, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn activity(&self) -> Result<Vec<VisitorActivity>, AppError> {
        let rows = sqlx::query_as::<_, VisitorActivityRow>(
            r#"
            SELECT v.id, v.name, v.email, COUNT(r.id) AS review_count
            FROM visitors v
            LEFT JOIN reviews r ON r.visitor_id = v.id
            GROUP BY v.id, v.name, v.email
            ORDER BY v.name, v.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, fields: NewVisitor) -> Result<Option<Visitor>, AppError> {
        let row = sqlx::query_as::<_, VisitorRow>(&format!(
            r#"
            UPDATE visitors SET
                name                = $2,
                email               = $3,
                visited_attractions = $4
            WHERE id = $1
            RETURNING {VISITOR_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.visited_attractions)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        // Waits for in-flight review inserts by this visitor, which hold
        // `FOR KEY SHARE` on the row, and keeps new ones out until commit.
        let exists = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM visitors WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if exists.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let reviewed = sqlx::query_scalar::<_, Uuid>(
            "SELECT DISTINCT attraction_id FROM reviews WHERE visitor_id = $1",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        let affected = lock_attractions(&mut tx, &reviewed).await?;

        // Reviews go with the visitor through ON DELETE CASCADE.
        sqlx::query("DELETE FROM visitors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for attraction_id in &affected {
            refresh_rating(&mut tx, *attraction_id).await?;
        }

        tx.commit().await?;

        tracing::debug!(visitor_id = %id, attractions = affected.len(), "Visitor reviews removed");
        Ok(true)
    }
}
