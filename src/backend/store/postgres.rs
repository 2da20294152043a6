/**
 * PostgreSQL Store
 *
 * [`Store`] implementation over a sqlx `PgPool`. The queries live next to
 * their models in `auth::users` and `chirps::db`; this type maps database
 * errors onto [`StoreError`].
 */

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{self, User};
use crate::backend::chirps::db;
use crate::backend::store::{Store, StoreError};
use crate::shared::Chirp;

/// [`Store`] backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        Ok(Self::new(PgPool::connect(database_url).await?))
    }

    /// Run the migrations in `migrations/`
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, StoreError> {
        users::create_user(&self.pool, email, hashed_password)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    StoreError::Conflict("email")
                }
                other => StoreError::Database(other),
            })
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(users::get_user_by_email(&self.pool, email).await?)
    }

    async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp, StoreError> {
        db::create_chirp(&self.pool, user_id, body)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    StoreError::UnknownUser(user_id)
                }
                other => StoreError::Database(other),
            })
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError> {
        Ok(db::load_chirps(&self.pool).await?)
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError> {
        Ok(db::get_chirp_by_id(&self.pool, id).await?)
    }

    async fn reset(&self) -> Result<(), StoreError> {
        users::delete_all_users(&self.pool).await?;
        Ok(())
    }
}
