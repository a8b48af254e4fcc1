use axum::{extract::State, response::Response};
use axum_extra::extract::CookieJar;
use gatehouse_application::LogoutUseCase;
use gatehouse_core::{PasswordHasher, SessionStore, UserStore};

use super::redirect_response;
use crate::state::WebState;

/// `POST /user/logout`: ends the session and always redirects to the login page.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, H, S>(State(state): State<WebState<U, H, S>>, jar: CookieJar) -> Response
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let token = state.session_cookie.token(&jar);
    let use_case = LogoutUseCase::new(state.session_store.clone());

    let redirect = use_case.execute(token).await;
    let jar = state.session_cookie.clear(jar);

    redirect_response(jar, redirect, &state.session_cookie)
}
