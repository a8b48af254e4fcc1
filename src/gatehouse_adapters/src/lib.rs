pub mod config;
pub mod csrf;
pub mod hashing;
pub mod persistence;

pub use csrf::CsrfToken;
pub use hashing::Argon2PasswordHasher;
pub use persistence::{
    HashMapSessionStore, HashMapUserStore, PostgresUserStore, RedisSessionStore,
};
