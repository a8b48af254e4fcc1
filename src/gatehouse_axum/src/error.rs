use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use gatehouse_application::{LoginError, RegisterError};
use gatehouse_core::SessionStoreError;
use thiserror::Error;

use crate::templates::ErrorTemplate;

/// Failures a route cannot recover from.
///
/// Validation and authentication failures never get here: they re-render the
/// form. Everything in this enum becomes a generic 500 page, with the cause
/// only in the logs.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Registration failed: {0}")]
    Register(#[from] RegisterError),

    #[error("Login failed: {0}")]
    Login(#[from] LoginError),

    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let page = ErrorTemplate {
            title: "Something went wrong",
        };
        match page.render() {
            Ok(body) => (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        }
    }
}
