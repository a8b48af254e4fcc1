use secrecy::Secret;

/// A plaintext password as submitted in a form.
///
/// Only ever handed to a [`PasswordHasher`](crate::PasswordHasher); it is
/// never stored and never rendered.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(Secret::new(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Output of a one-way, salted password hash. Safe to persist.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    /// Wrap an already computed hash, e.g. one read back from storage.
    pub fn from_hash(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
