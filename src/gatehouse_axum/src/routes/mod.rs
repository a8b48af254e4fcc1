//! Axum route handlers for the user pages.
//!
//! Each handler extracts the form and cookies, calls the matching use case,
//! and turns its [`FlowOutcome`] into a response.

pub mod home;
pub mod login;
pub mod logout;
pub mod register;

pub use home::home;
pub use login::{login, login_page};
pub use logout::logout;
pub use register::{register, register_page};

use askama::Template;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use gatehouse_adapters::CsrfToken;
use gatehouse_application::Redirect as FlowRedirect;

use crate::{error::WebError, session::SessionCookieConfig};

/// `303 See Other` to the flow's target, storing any newly established session.
fn redirect_response(
    jar: CookieJar,
    redirect: FlowRedirect,
    session_cookie: &SessionCookieConfig,
) -> Response {
    let jar = match &redirect.session {
        Some(token) => session_cookie.set(jar, token),
        None => jar,
    };

    (jar, Redirect::to(redirect.target)).into_response()
}

/// Render a form page, handing out the CSRF cookie matching its hidden field.
fn form_response<T: Template>(
    jar: CookieJar,
    csrf_token: &CsrfToken,
    session_cookie: &SessionCookieConfig,
    template: T,
) -> Result<Response, WebError> {
    let body = template.render()?;
    let jar = jar.add(csrf_token.cookie(session_cookie.secure));

    Ok((jar, Html(body)).into_response())
}
