//! HTTP adapter - REST endpoints and static assets.
//!
//! The adapter only translates requests; every rule lives in the
//! application handlers and the domain.

pub mod error;
pub mod middleware;
pub mod session;

pub use error::{ApiError, ErrorResponse};
pub use session::{session_routes, SessionHandlers};

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Full application router: session endpoints, landing page, static assets.
pub fn app_router(handlers: SessionHandlers, server: &ServerConfig) -> Router {
    let static_dir = server.static_path();

    session_routes(handlers)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}
