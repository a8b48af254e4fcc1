use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use gatehouse_adapters::config::SessionSettings;
use gatehouse_core::SessionToken;

/// How the session token travels in cookies.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub cookie_name: String,
    pub secure: bool,
}

impl From<&SessionSettings> for SessionCookieConfig {
    fn from(settings: &SessionSettings) -> Self {
        Self {
            cookie_name: settings.cookie_name.clone(),
            secure: settings.secure_cookies,
        }
    }
}

impl SessionCookieConfig {
    /// The session token carried by the request, if any.
    pub fn token(&self, jar: &CookieJar) -> Option<SessionToken> {
        jar.get(&self.cookie_name)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .map(|value| SessionToken::new(value.to_owned()))
    }

    pub fn set(&self, jar: CookieJar, token: &SessionToken) -> CookieJar {
        jar.add(
            Cookie::build((self.cookie_name.clone(), token.as_str().to_owned()))
                .path("/")
                .http_only(true)
                .secure(self.secure)
                .same_site(SameSite::Lax),
        )
    }

    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build((self.cookie_name.clone(), "")).path("/"))
    }
}
