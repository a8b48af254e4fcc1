use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_DIR, defaults, env};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub session: SessionSettings,
    pub storage: StorageSettings,
    pub postgres: PostgresSettings,
    pub redis: RedisSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub ttl_in_seconds: i64,
    /// Mark session and CSRF cookies `Secure`.
    pub secure_cookies: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-process user and session stores.
    Memory,
    /// Users in PostgreSQL, sessions in Redis.
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
}

impl Settings {
    /// Load settings from `config/base.json`, `config/<environment>.json` and
    /// `GATEHOUSE__*` environment variables, later sources winning.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }

        let environment =
            std::env::var(env::ENVIRONMENT_ENV_VAR).unwrap_or_else(|_| "local".to_string());

        with_defaults()?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/base")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize::<Settings>()?
            .validated()
    }

    /// Reject values that deserialize fine but cannot work at runtime.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.session.ttl_in_seconds < 1 {
            return Err(ConfigError::Message(format!(
                "session.ttl_in_seconds must be at least 1, got {}",
                self.session.ttl_in_seconds
            )));
        }
        Ok(self)
    }
}

impl SessionSettings {
    /// Session lifetime for stores that take an unsigned TTL, never below one second.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_in_seconds.max(1).unsigned_abs()
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.address", defaults::APP_ADDRESS)?
        .set_default("session.cookie_name", defaults::SESSION_COOKIE_NAME)?
        .set_default("session.ttl_in_seconds", defaults::SESSION_TTL_IN_SECONDS)?
        .set_default("session.secure_cookies", false)?
        .set_default("storage.backend", "memory")?
        .set_default("postgres.url", defaults::POSTGRES_URL)?
        .set_default("redis.host_name", defaults::REDIS_HOST_NAME)
}
