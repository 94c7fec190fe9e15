//! Assessment command and query handlers.

mod errors;
mod export_assessment;
mod get_assessment;
mod go_back;
mod request_results;
mod restart_assessment;
mod result_aggregator;
mod submit_step;

pub use errors::{AssessmentError, SCORING_SERVICE_NOTICE};
pub use export_assessment::{ExportAssessmentHandler, ExportAssessmentQuery};
pub use get_assessment::{
    AssessmentView, CurrentItemView, GetAssessmentHandler, GetAssessmentQuery, ResultsView,
};
pub use go_back::{GoBackCommand, GoBackHandler};
pub use request_results::{RequestResultsCommand, RequestResultsHandler};
pub use restart_assessment::{RestartAssessmentCommand, RestartAssessmentHandler};
pub use result_aggregator::ResultAggregator;
pub use submit_step::{SubmitStepCommand, SubmitStepHandler, SubmitStepResult};
