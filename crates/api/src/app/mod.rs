//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store construction and the handler shared by all routes
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and body decoding
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by the server).
pub fn build_app(config: &ApiConfig) -> Router {
    router(Arc::new(services::build_services(config)))
}

/// Router over already-built services.
pub fn router(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(middleware::request_logging))
}
