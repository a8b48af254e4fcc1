use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{HashedPassword, Password};

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Port trait for the one-way password hashing service
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHashError>;

    /// Whether `password` is the plaintext behind `hash`.
    ///
    /// A mismatch is `Ok(false)`; `Err` is reserved for hashes that cannot be
    /// checked at all.
    async fn verify(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, PasswordHashError>;
}
