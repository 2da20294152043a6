/**
 * User Model and Database Operations
 *
 * This module handles user data and the PostgreSQL queries behind the
 * user half of [`PgStore`](crate::backend::store::PgStore).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub hashed_password: String,
}

impl User {
    /// Build a new, not yet persisted user
    pub fn new(email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.into(),
            hashed_password: hashed_password.into(),
        }
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `hashed_password` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    hashed_password: &str,
) -> Result<User, sqlx::Error> {
    let user = User::new(email, hashed_password);

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, created_at, updated_at, email, hashed_password)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at, updated_at, email, hashed_password
        "#,
    )
    .bind(user.id)
    .bind(user.created_at)
    .bind(user.updated_at)
    .bind(&user.email)
    .bind(&user.hashed_password)
    .fetch_one(pool)
    .await
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, created_at, updated_at, email, hashed_password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Delete every user
///
/// Chirps go with them through `ON DELETE CASCADE`.
pub async fn delete_all_users(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE users CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}
