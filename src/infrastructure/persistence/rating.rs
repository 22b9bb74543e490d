//! Rating recomputation shared by every write that adds or removes reviews.
//!
//! Callers run these inside a transaction that already holds the attraction's
//! row lock (see [`lock_attractions`]), so concurrent writers on the same
//! attraction cannot interleave their recomputations.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::domain::rating::average_rating;
use crate::error::AppError;

/// Locks attraction rows in ID order and returns the IDs that exist.
///
/// Ordering the locks keeps multi-attraction writers deadlock free.
pub(super) async fn lock_attractions(
    conn: &mut PgConnection,
    ids: &[Uuid],
) -> Result<Vec<Uuid>, AppError> {
    let locked = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id FROM attractions
        WHERE id = ANY($1)
        ORDER BY id
        FOR UPDATE
        "#,
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;

    Ok(locked)
}

/// Rewrites an attraction's rating from the reviews currently stored for it.
///
/// Returns the new rating.
pub(super) async fn refresh_rating(
    conn: &mut PgConnection,
    attraction_id: Uuid,
) -> Result<f64, AppError> {
    let scores = sqlx::query_scalar::<_, i16>("SELECT score FROM reviews WHERE attraction_id = $1")
        .bind(attraction_id)
        .fetch_all(&mut *conn)
        .await?;

    let rating = average_rating(&scores);

    sqlx::query("UPDATE attractions SET rating = $2 WHERE id = $1")
        .bind(attraction_id)
        .bind(rating)
        .execute(&mut *conn)
        .await?;

    tracing::debug!(%attraction_id, reviews = scores.len(), rating, "Rating recomputed");

    Ok(rating)
}
