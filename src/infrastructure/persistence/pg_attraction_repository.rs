//! PostgreSQL implementation of attraction repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::rating::{lock_attractions, refresh_rating};
use super::rows::{ATTRACTION_COLUMNS, AttractionRow};
use crate::domain::entities::{Attraction, NewAttraction};
use crate::domain::repositories::AttractionRepository;
use crate::error::AppError;

/// PostgreSQL repository for attractions.
///
/// Deleting an attraction cascades to its reviews through the foreign key and
/// scrubs the ID from `visitors.visited_attractions` in the same transaction.
pub struct PgAttractionRepository {
    pool: Arc<PgPool>,
}

impl PgAttractionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttractionRepository for PgAttractionRepository {
    async fn create(&self, new_attraction: NewAttraction) -> Result<Attraction, AppError> {
        let row = sqlx::query_as::<_, AttractionRow>(&format!(
            r#"
            INSERT INTO attractions (name, location, entry_fee)
            VALUES ($1, $2, $3)
            RETURNING {ATTRACTION_COLUMNS}
            "#
        ))
        .bind(&new_attraction.name)
        .bind(&new_attraction.location)
        .bind(new_attraction.entry_fee)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attraction>, AppError> {
        let row = sqlx::query_as::<_, AttractionRow>(&format!(
            "SELECT {ATTRACTION_COLUMNS} FROM attractions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Attraction>, AppError> {
        let rows = sqlx::query_as::<_, AttractionRow>(&format!(
            "SELECT {ATTRACTION_COLUMNS} FROM attractions ORDER BY name, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn top_rated(&self, limit: i64) -> Result<Vec<Attraction>, AppError> {
        let rows = sqlx::query_as::<_, AttractionRow>(&format!(
            r#"
            SELECT {ATTRACTION_COLUMNS}
            FROM attractions
            ORDER BY rating DESC, name, id
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        fields: NewAttraction,
    ) -> Result<Option<Attraction>, AppError> {
        let row = sqlx::query_as::<_, AttractionRow>(&format!(
            r#"
            UPDATE attractions SET
                name      = $2,
                location  = $3,
                entry_fee = $4
            WHERE id = $1
            RETURNING {ATTRACTION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.location)
        .bind(fields.entry_fee)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM attractions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE visitors
            SET visited_attractions = array_remove(visited_attractions, $1)
            WHERE $1 = ANY(visited_attractions)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn recompute_ratings(&self) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        let ids = sqlx::query_scalar::<_, Uuid>("SELECT id FROM attractions")
            .fetch_all(&mut *tx)
            .await?;

        let locked = lock_attractions(&mut tx, &ids).await?;
        for attraction_id in &locked {
            refresh_rating(&mut tx, *attraction_id).await?;
        }

        tx.commit().await?;

        tracing::info!(attractions = locked.len(), "Ratings recomputed");
        Ok(locked.len() as u64)
    }
}
