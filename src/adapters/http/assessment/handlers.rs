//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    AssessmentError, AssessmentHandle, ExportAssessmentHandler, ExportAssessmentQuery,
    GetAssessmentHandler, GetAssessmentQuery, GoBackCommand, GoBackHandler,
    RequestResultsCommand, RequestResultsHandler, RestartAssessmentCommand,
    RestartAssessmentHandler, ResultAggregator, SubmitStepCommand, SubmitStepHandler,
};
use crate::ports::{AssessmentExporter, ExportFormat};

use super::dto::{
    AssessmentResponse, ErrorResponse, ExportQueryParams, ResultsResponse, SubmitStepRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    get_handler: Arc<GetAssessmentHandler>,
    submit_handler: Arc<SubmitStepHandler>,
    back_handler: Arc<GoBackHandler>,
    restart_handler: Arc<RestartAssessmentHandler>,
    results_handler: Arc<RequestResultsHandler>,
    export_handler: Arc<ExportAssessmentHandler>,
}

impl AssessmentHandlers {
    /// Wires every handler to the same session.
    pub fn new(
        handle: AssessmentHandle,
        aggregator: Arc<ResultAggregator>,
        exporters: Vec<Arc<dyn AssessmentExporter>>,
    ) -> Self {
        Self {
            get_handler: Arc::new(GetAssessmentHandler::new(handle.clone())),
            submit_handler: Arc::new(SubmitStepHandler::new(handle.clone())),
            back_handler: Arc::new(GoBackHandler::new(handle.clone())),
            restart_handler: Arc::new(RestartAssessmentHandler::new(handle.clone())),
            results_handler: Arc::new(RequestResultsHandler::new(handle.clone(), aggregator)),
            export_handler: Arc::new(ExportAssessmentHandler::new(handle, exporters)),
        }
    }

    async fn current_view(&self) -> AssessmentResponse {
        self.get_handler.handle(GetAssessmentQuery).await.into()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/assessment - Current wizard state
pub async fn get_assessment(State(handlers): State<AssessmentHandlers>) -> Response {
    (StatusCode::OK, Json(handlers.current_view().await)).into_response()
}

/// POST /api/assessment/step - Answer the current item and advance
pub async fn submit_step(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<SubmitStepRequest>,
) -> Response {
    let cmd = SubmitStepCommand {
        score: req.score,
        comment: req.comment,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(handlers.current_view().await)).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessment/back - Return to the previous item
pub async fn go_back(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.back_handler.handle(GoBackCommand).await {
        Ok(_) => (StatusCode::OK, Json(handlers.current_view().await)).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessment/restart - Clear everything and start over
pub async fn restart(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.restart_handler.handle(RestartAssessmentCommand).await {
        Ok(_) => (StatusCode::OK, Json(handlers.current_view().await)).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessment/results - Score the completed assessment
pub async fn request_results(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.results_handler.handle(RequestResultsCommand).await {
        Ok(results) => {
            let response: ResultsResponse = results.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessment/export?format=csv|markdown|xlsx - Download the assessment
pub async fn export_assessment(
    State(handlers): State<AssessmentHandlers>,
    Query(params): Query<ExportQueryParams>,
) -> Response {
    let format = match params.format.as_deref() {
        None => ExportFormat::default(),
        Some(raw) => match raw.parse::<ExportFormat>() {
            Ok(format) => format,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(e.to_string())),
                )
                    .into_response()
            }
        },
    };

    match handlers
        .export_handler
        .handle(ExportAssessmentQuery { format })
        .await
    {
        Ok(doc) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, doc.content_type),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", doc.filename),
                ),
            ],
            doc.content,
        )
            .into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(error: &AssessmentError) -> StatusCode {
    match error {
        AssessmentError::ScoreRequired | AssessmentError::ValidationFailed { .. } => {
            StatusCode::BAD_REQUEST
        }
        AssessmentError::InvalidState(_)
        | AssessmentError::Incomplete
        | AssessmentError::StaleResult => StatusCode::CONFLICT,
        AssessmentError::Scoring(_) => StatusCode::BAD_GATEWAY,
        AssessmentError::Export(_) | AssessmentError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn handle_assessment_error(error: AssessmentError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(code = %error.code(), error = %error, "Assessment request failed");
    }

    (
        status,
        Json(ErrorResponse::new(error.code().to_string(), error.user_message())),
    )
        .into_response()
}
