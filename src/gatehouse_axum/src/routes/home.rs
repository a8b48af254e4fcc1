use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use gatehouse_core::{PasswordHasher, SessionStore, UserStore};

use crate::{error::WebError, state::WebState, templates::HomeTemplate};

/// `GET /`: where successful logins and registrations land.
#[tracing::instrument(name = "Home", skip_all)]
pub async fn home<U, H, S>(
    State(state): State<WebState<U, H, S>>,
    jar: CookieJar,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let signed_in_as = match state.session_cookie.token(&jar) {
        Some(token) => state.session_store.lookup(&token).await?,
        None => None,
    };

    let body = HomeTemplate {
        title: "Home",
        signed_in_as,
    }
    .render()?;

    Ok(Html(body).into_response())
}
