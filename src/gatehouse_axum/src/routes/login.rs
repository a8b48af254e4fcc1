use axum::{extract::State, response::Response};
use axum_extra::extract::CookieJar;
use gatehouse_adapters::CsrfToken;
use gatehouse_application::{FlowOutcome, LoginInput, LoginPage, LoginUseCase};
use gatehouse_core::{PasswordHasher, SessionStore, UserStore};

use super::{form_response, redirect_response};
use crate::{
    csrf::CsrfForm, error::WebError, session::SessionCookieConfig, state::WebState,
    templates::LoginTemplate,
};

/// `GET /user/login`: empty form with a fresh CSRF token.
#[tracing::instrument(name = "Login page", skip_all)]
pub async fn login_page(
    State(session_cookie): State<SessionCookieConfig>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let csrf_token = CsrfToken::generate();
    let page = LoginPage::empty(csrf_token.as_str().to_owned());

    form_response(jar, &csrf_token, &session_cookie, LoginTemplate::from(page))
}

/// `POST /user/login`
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, S>(
    State(state): State<WebState<U, H, S>>,
    jar: CookieJar,
    CsrfForm(fields): CsrfForm,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let csrf_token = CsrfToken::generate();
    let use_case = LoginUseCase::new(
        state.user_store.clone(),
        state.password_hasher.clone(),
        state.session_store.clone(),
    );

    let outcome = use_case
        .execute(LoginInput {
            fields,
            csrf_token: csrf_token.as_str().to_owned(),
            current_session: state.session_cookie.token(&jar),
        })
        .await?;

    match outcome {
        FlowOutcome::Redirect(redirect) => {
            Ok(redirect_response(jar, redirect, &state.session_cookie))
        }
        FlowOutcome::Render(page) => form_response(
            jar,
            &csrf_token,
            &state.session_cookie,
            LoginTemplate::from(page),
        ),
    }
}
