use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use gatehouse_core::{HashedPassword, Password, PasswordHashError, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHashError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::from_hash(Secret::from(h.to_string())))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| PasswordHashError::Hashing(e.to_string()))?;

        result.map_err(PasswordHashError::Hashing)
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let password = password.clone();
        let hash = hash.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash = PasswordHash::new(hash.as_ref().expose_secret())
                    .map_err(|e| PasswordHashError::MalformedHash(e.to_string()))?;

                let verifier = argon2().map_err(PasswordHashError::Hashing)?;
                match verifier.verify_password(
                    password.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHashError::Hashing(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHashError::Hashing(e.to_string()))?
    }
}
