use std::fmt;

use secrecy::{ExposeSecret, Secret};

/// Opaque handle to an authenticated session.
///
/// The flows only create and end sessions; what the token refers to is up to
/// the [`SessionStore`](crate::SessionStore) that issued it.
#[derive(Clone)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

impl PartialEq for SessionToken {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SessionToken {}
