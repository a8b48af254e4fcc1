//! Double-submit CSRF tokens.
//!
//! A fresh random token is set as a cookie and embedded in each rendered form.
//! A state-changing submission is accepted only when the form field and the
//! cookie carry the same value.

use axum_extra::extract::cookie::{Cookie, SameSite};
use rand::Rng;

use crate::config::constants::{CSRF_COOKIE_NAME, CSRF_TOKEN_BYTES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn generate() -> Self {
        let bytes: [u8; CSRF_TOKEN_BYTES] = rand::rng().random();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cookie carrying this token back on the next submission.
    pub fn cookie(&self, secure: bool) -> Cookie<'static> {
        Cookie::build((CSRF_COOKIE_NAME, self.0.clone()))
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Lax)
            .build()
    }
}

/// Whether the submitted form token matches the cookie token.
///
/// Runs in time independent of where the first differing byte is.
pub fn tokens_match(cookie_token: &str, submitted_token: &str) -> bool {
    if cookie_token.is_empty() || cookie_token.len() != submitted_token.len() {
        return false;
    }

    cookie_token
        .bytes()
        .zip(submitted_token.bytes())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
