mod helpers;
mod telemetry;
mod web_service;

pub use helpers::{StartupError, build_from_settings, configure_postgresql, configure_redis};
pub use web_service::WebService;
