//! # Gatehouse
//!
//! Facade crate re-exporting the public APIs of the Gatehouse components:
//! server-rendered registration, login and logout backed by pluggable user
//! and session stores.
//!
//! ## Structure
//!
//! - **Core**: `NewUser`, `User`, `Password`, the validation `RuleSet` and the store ports
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `LogoutUseCase`
//! - **Adapters**: in-memory, PostgreSQL and Redis stores, Argon2 hashing, settings
//! - **Web**: axum routes and templates, and `WebService` as the entry point

/// Domain types, ports and form validation
pub mod core {
    pub use gatehouse_core::*;
}

pub use gatehouse_core::{
    FormFields, HashedPassword, NewUser, Password, PasswordHashError, PasswordHasher, RuleSet,
    SessionStore, SessionStoreError, SessionToken, User, UserStore, UserStoreError,
    ValidationErrors,
};

/// Register, login and logout flows
pub mod application {
    pub use gatehouse_application::*;
}

pub use gatehouse_application::{
    FlowOutcome, LoginUseCase, LogoutUseCase, Redirect, RegisterUseCase,
};

/// Store, hashing and configuration implementations
pub mod adapters {
    pub use gatehouse_adapters::*;
}

pub use gatehouse_adapters::{
    Argon2PasswordHasher, CsrfToken, HashMapSessionStore, HashMapUserStore, PostgresUserStore,
    RedisSessionStore, config::Settings,
};

/// Axum extractors, routes and templates
pub mod web {
    pub use gatehouse_axum::*;
}

pub use gatehouse_axum::{SessionCookieConfig, WebError, WebState};

pub use gatehouse_web_service::{StartupError, WebService, build_from_settings};

pub use async_trait::async_trait;
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
