//! HTTP routes for assessment endpoints.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use super::handlers::{
    export_assessment, get_assessment, go_back, request_results, restart, submit_step,
    AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
///
/// `/results` waits on a whole scoring run and gets `results_timeout`; every
/// other endpoint gets `request_timeout`.
pub fn assessment_routes(
    handlers: AssessmentHandlers,
    request_timeout: Duration,
    results_timeout: Duration,
) -> Router {
    let results = Router::new()
        .route("/results", post(request_results))
        .layer(TimeoutLayer::new(results_timeout));

    Router::new()
        .route("/", get(get_assessment))
        .route("/step", post(submit_step))
        .route("/back", post(go_back))
        .route("/restart", post(restart))
        .route("/export", get(export_assessment))
        .layer(TimeoutLayer::new(request_timeout))
        .merge(results)
        .with_state(handlers)
}
