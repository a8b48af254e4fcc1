use axum::extract::FromRef;

use crate::session::SessionCookieConfig;

/// Shared state handed to every route.
///
/// Stores are cheap `Clone` handles over shared backends.
#[derive(Clone)]
pub struct WebState<U, H, S> {
    pub user_store: U,
    pub password_hasher: H,
    pub session_store: S,
    pub session_cookie: SessionCookieConfig,
}

impl<U, H, S> WebState<U, H, S> {
    pub fn new(
        user_store: U,
        password_hasher: H,
        session_store: S,
        session_cookie: SessionCookieConfig,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            session_store,
            session_cookie,
        }
    }
}

impl<U, H, S> FromRef<WebState<U, H, S>> for SessionCookieConfig
where
    U: Clone,
    H: Clone,
    S: Clone,
{
    fn from_ref(state: &WebState<U, H, S>) -> Self {
        state.session_cookie.clone()
    }
}
