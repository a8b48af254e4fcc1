//! CSRF check for form submissions.

use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use gatehouse_adapters::{
    config::{CSRF_COOKIE_NAME, CSRF_FIELD_NAME},
    csrf::tokens_match,
};
use gatehouse_core::FormFields;
use thiserror::Error;

/// Form body whose `_csrf` field matched the CSRF cookie.
///
/// Extracting this rejects the request before the handler runs, so a flow
/// never sees a forged submission.
#[derive(Debug, Clone)]
pub struct CsrfForm(pub FormFields);

impl<S> FromRequest<S> for CsrfForm
where
    S: Send + Sync,
{
    type Rejection = CsrfRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(req.headers());
        let Form(fields) = Form::<FormFields>::from_request(req, state).await?;

        let cookie_token = jar
            .get(CSRF_COOKIE_NAME)
            .map(|cookie| cookie.value())
            .unwrap_or_default();

        if !tokens_match(cookie_token, fields.value(CSRF_FIELD_NAME)) {
            tracing::warn!("Rejected form submission with a missing or invalid CSRF token");
            return Err(CsrfRejection::InvalidToken);
        }

        Ok(CsrfForm(fields))
    }
}

#[derive(Debug, Error)]
pub enum CsrfRejection {
    #[error("Invalid CSRF token")]
    InvalidToken,
    #[error("Invalid form: {0}")]
    InvalidForm(#[from] FormRejection),
}

impl IntoResponse for CsrfRejection {
    fn into_response(self) -> Response {
        match self {
            CsrfRejection::InvalidToken => {
                (StatusCode::FORBIDDEN, "Invalid CSRF token").into_response()
            }
            CsrfRejection::InvalidForm(rejection) => rejection.into_response(),
        }
    }
}
