//! `askama` views for the user pages.

use askama::Template;
use gatehouse_adapters::config::CSRF_FIELD_NAME;
use gatehouse_application::{LoginPage, RegisterPage};

#[derive(Template)]
#[template(path = "user-register.html")]
pub struct RegisterTemplate {
    pub page: RegisterPage,
    pub csrf_field: &'static str,
}

impl From<RegisterPage> for RegisterTemplate {
    fn from(page: RegisterPage) -> Self {
        Self {
            page,
            csrf_field: CSRF_FIELD_NAME,
        }
    }
}

#[derive(Template)]
#[template(path = "user-login.html")]
pub struct LoginTemplate {
    pub page: LoginPage,
    pub csrf_field: &'static str,
}

impl From<LoginPage> for LoginTemplate {
    fn from(page: LoginPage) -> Self {
        Self {
            page,
            csrf_field: CSRF_FIELD_NAME,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub signed_in_as: Option<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: &'static str,
}
