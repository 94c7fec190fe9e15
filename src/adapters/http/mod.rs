//! HTTP adapters - REST API implementations.
//!
//! `app_router` mounts every endpoint under `/api` and applies the shared
//! middleware stack (tracing, CORS). Timeouts are set per route.

pub mod assessment;

pub use assessment::{assessment_routes, AssessmentHandlers};

use std::time::Duration;

use axum::{routing::get, Router};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the application router.
///
/// `results_timeout` usually comes from [`ServerConfig::results_timeout`].
pub fn app_router(
    handlers: AssessmentHandlers,
    server: &ServerConfig,
    results_timeout: Duration,
) -> Router {
    let assessment = assessment_routes(handlers, server.request_timeout(), results_timeout);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api/assessment", assessment)
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured, otherwise exactly the configured list.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
