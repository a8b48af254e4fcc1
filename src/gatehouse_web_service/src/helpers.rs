use std::sync::Arc;

use gatehouse_adapters::{
    Argon2PasswordHasher, HashMapSessionStore, HashMapUserStore, PostgresUserStore,
    RedisSessionStore,
    config::{Settings, StorageBackend},
};
use gatehouse_axum::SessionCookieConfig;
use redis::RedisResult;
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::web_service::WebService;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Postgres(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Failed to connect to Redis: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Create a PostgreSQL connection pool and run all pending migrations
pub async fn configure_postgresql(url: &Secret<String>) -> Result<PgPool, StartupError> {
    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(url.expose_secret())
        .await?;

    sqlx::migrate!("../gatehouse_adapters/migrations")
        .run(&pg_pool)
        .await?;

    Ok(pg_pool)
}

/// Open a Redis connection to `redis_hostname`
pub fn configure_redis(redis_hostname: &str) -> RedisResult<redis::Connection> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)?.get_connection()
}

/// Build the web service with the storage backend selected in `settings`
pub async fn build_from_settings(settings: &Settings) -> Result<WebService, StartupError> {
    let session_cookie = SessionCookieConfig::from(&settings.session);
    let password_hasher = Argon2PasswordHasher::new();

    let service = match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory user and session stores");
            WebService::new(
                HashMapUserStore::new(),
                password_hasher,
                HashMapSessionStore::new(settings.session.ttl_in_seconds),
                session_cookie,
            )
        }
        StorageBackend::Postgres => {
            tracing::info!("Using PostgreSQL user store and Redis session store");
            let pg_pool = configure_postgresql(&settings.postgres.url).await?;
            let redis_conn = configure_redis(&settings.redis.host_name)?;

            WebService::new(
                PostgresUserStore::new(pg_pool),
                password_hasher,
                RedisSessionStore::new(
                    Arc::new(RwLock::new(redis_conn)),
                    settings.session.ttl_seconds(),
                ),
                session_cookie,
            )
        }
    };

    Ok(service)
}
