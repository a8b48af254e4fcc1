pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    PostgresSettings, RedisSettings, ServerSettings, SessionSettings, Settings, StorageBackend,
    StorageSettings,
};
