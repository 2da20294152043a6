/**
 * Database Operations for Chirps
 *
 * This module provides the PostgreSQL queries for persisting and loading
 * chirps.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::Chirp;

#[derive(sqlx::FromRow)]
struct ChirpRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    body: String,
    user_id: Uuid,
}

impl From<ChirpRow> for Chirp {
    fn from(row: ChirpRow) -> Self {
        Chirp {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            body: row.body,
            user_id: row.user_id,
        }
    }
}

/// Save a chirp to the database
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_id` - Author's user ID
/// * `body` - Chirp text, already validated and censored
///
/// # Returns
/// The stored chirp
pub async fn create_chirp(pool: &PgPool, user_id: Uuid, body: &str) -> Result<Chirp, sqlx::Error> {
    let chirp = Chirp::new(body, user_id);

    let row = sqlx::query_as::<_, ChirpRow>(
        r#"
        INSERT INTO chirps (id, created_at, updated_at, body, user_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at, updated_at, body, user_id
        "#,
    )
    .bind(chirp.id)
    .bind(chirp.created_at)
    .bind(chirp.updated_at)
    .bind(&chirp.body)
    .bind(chirp.user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Load all chirps from the database
///
/// # Returns
/// Chirps ordered by created_at, or error
pub async fn load_chirps(pool: &PgPool) -> Result<Vec<Chirp>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ChirpRow>(
        r#"
        SELECT id, created_at, updated_at, body, user_id
        FROM chirps
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Chirp::from).collect())
}

/// Get a chirp by ID
pub async fn get_chirp_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Chirp>, sqlx::Error> {
    let row = sqlx::query_as::<_, ChirpRow>(
        r#"
        SELECT id, created_at, updated_at, body, user_id
        FROM chirps
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Chirp::from))
}
