//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler works on the single session behind an `AssessmentHandle`.

mod assessment_handle;
pub mod handlers;

pub use assessment_handle::AssessmentHandle;
pub use handlers::{
    AssessmentError, AssessmentView, CurrentItemView, ExportAssessmentHandler,
    ExportAssessmentQuery, GetAssessmentHandler, GetAssessmentQuery, GoBackCommand,
    GoBackHandler, RequestResultsCommand, RequestResultsHandler, RestartAssessmentCommand,
    RestartAssessmentHandler, ResultAggregator, ResultsView, SubmitStepCommand,
    SubmitStepHandler, SubmitStepResult, SCORING_SERVICE_NOTICE,
};
