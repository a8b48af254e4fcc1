use axum::{
    Router,
    routing::{get, post},
};
use gatehouse_axum::{
    SessionCookieConfig, WebState,
    routes::{home, login, login_page, logout, register, register_page},
};
use gatehouse_core::{PasswordHasher, SessionStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The register/login/logout web application
pub struct WebService {
    router: Router,
}

impl WebService {
    /// Create a new WebService with the provided stores and hasher
    ///
    /// # Arguments
    /// * `user_store` - Store for registered users (must be Clone)
    /// * `password_hasher` - One-way password hashing service
    /// * `session_store` - Store for login sessions (must be Clone)
    /// * `session_cookie` - Name and flags of the session cookie
    pub fn new<U, H, S>(
        user_store: U,
        password_hasher: H,
        session_store: S,
        session_cookie: SessionCookieConfig,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        S: SessionStore + Clone + 'static,
    {
        let state = WebState::new(user_store, password_hasher, session_store, session_cookie);

        let router = Router::new()
            .route("/", get(home::<U, H, S>))
            .route(
                "/user/register",
                get(register_page).post(register::<U, H, S>),
            )
            .route("/user/login", get(login_page).post(login::<U, H, S>))
            .route("/user/logout", post(logout::<U, H, S>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self
            .router
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));
        self
    }

    /// Convert the WebService into a router that can be nested into another application
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the web service as a standalone server until Ctrl+C
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Web service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
