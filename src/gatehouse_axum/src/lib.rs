//! Axum integration for the Gatehouse register/login/logout flows.
//!
//! Routes here extract form data and cookies, hand them to the
//! framework-agnostic use cases in `gatehouse_application`, and turn the
//! outcome into either a `303 See Other` or a rendered `askama` page.
//!
//! # Usage
//!
//! ```ignore
//! use gatehouse_axum::{WebState, routes};
//!
//! let app = Router::new()
//!     .route("/user/login", get(routes::login_page).post(routes::login::<U, H, S>))
//!     .with_state(state);
//! ```

pub mod csrf;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;

pub use csrf::{CsrfForm, CsrfRejection};
pub use error::WebError;
pub use session::SessionCookieConfig;
pub use state::WebState;
