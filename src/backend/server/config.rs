/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables, and opening the store the configuration names.
 *
 * # Variables
 *
 * | Variable                 | Default     |
 * |--------------------------|-------------|
 * | `JWT_SECRET`             | required    |
 * | `DATABASE_URL`           | in-memory   |
 * | `SERVER_HOST`            | `127.0.0.1` |
 * | `SERVER_PORT`            | `8080`      |
 * | `STATIC_DIR`             | `.`         |
 * | `TOKEN_DEFAULT_TTL_SECS` | `3600`      |
 * | `TOKEN_MAX_TTL_SECS`     | `3600`      |
 */

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::tokens::{
    TokenLifetimePolicy, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS,
};
use crate::backend::store::{MemoryStore, PgStore, Store};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = ".";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set to an unusable value
    #[error("invalid value for {var}: {reason}")]
    Invalid {
        var: &'static str,
        reason: String,
    },
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Shared secret used to sign and validate tokens
    pub jwt_secret: String,
    /// PostgreSQL connection string; the in-memory store is used when unset
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    /// Directory served under `/app`
    pub static_dir: PathBuf,
    pub token_lifetime: TokenLifetimePolicy,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - `JWT_SECRET` is unset
    /// * `ConfigError::Invalid` - A value does not parse, or the token
    ///   lifetimes do not satisfy `0 < default <= max`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let database_url = get("DATABASE_URL");

        let host = match get("SERVER_HOST") {
            Some(value) => parse_var("SERVER_HOST", &value)?,
            None => parse_var("SERVER_HOST", DEFAULT_HOST)?,
        };
        let port = match get("SERVER_PORT") {
            Some(value) => parse_var("SERVER_PORT", &value)?,
            None => DEFAULT_PORT,
        };
        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let default_ttl = match get("TOKEN_DEFAULT_TTL_SECS") {
            Some(value) => parse_var("TOKEN_DEFAULT_TTL_SECS", &value)?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };
        let max_ttl = match get("TOKEN_MAX_TTL_SECS") {
            Some(value) => parse_var("TOKEN_MAX_TTL_SECS", &value)?,
            None => MAX_TOKEN_TTL_SECS,
        };
        let token_lifetime =
            TokenLifetimePolicy::new(default_ttl, max_ttl).map_err(|e| ConfigError::Invalid {
                var: "TOKEN_DEFAULT_TTL_SECS",
                reason: format!("{} (default {}s, max {}s)", e, default_ttl, max_ttl),
            })?;

        Ok(Self {
            jwt_secret,
            database_url,
            host,
            port,
            static_dir,
            token_lifetime,
        })
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

/// Open the store named by the configuration
///
/// This function:
/// 1. Falls back to the in-memory store when `DATABASE_URL` is unset
/// 2. Connects to PostgreSQL
/// 3. Runs database migrations
///
/// # Errors
///
/// Connection failures are returned. Migration failures are logged and
/// startup continues, since the schema may already be current.
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn Store>, sqlx::Error> {
    let database_url = match &config.database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data will not persist.");
            return Ok(Arc::new(MemoryStore::new()));
        }
    };

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match store.migrate().await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(Arc::new(store))
}
