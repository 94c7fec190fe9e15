//! Assessment application errors.

use crate::domain::assessment::SCORE_REQUIRED_MESSAGE;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{AIError, ExportError};

/// Notice shown whenever the scoring service cannot produce results.
pub const SCORING_SERVICE_NOTICE: &str = "Error contacting scoring service.";

/// Errors returned by assessment command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Tried to move on without a score.
    ScoreRequired,
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// Operation not valid in the current state.
    InvalidState(String),
    /// Results requested before every item was answered.
    Incomplete,
    /// Results belong to answers that have since changed.
    StaleResult,
    /// The scoring service failed.
    Scoring(AIError),
    /// Export failed.
    Export(String),
    /// Anything else.
    Internal(String),
}

impl AssessmentError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        AssessmentError::InvalidState(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::ScoreRequired => ErrorCode::ScoreRequired,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            AssessmentError::Incomplete => ErrorCode::AssessmentIncomplete,
            AssessmentError::StaleResult => ErrorCode::StaleResult,
            AssessmentError::Scoring(_) => ErrorCode::AIProviderError,
            AssessmentError::Export(_) => ErrorCode::ExportFailed,
            AssessmentError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Detailed message for logs.
    pub fn message(&self) -> String {
        match self {
            AssessmentError::ScoreRequired => SCORE_REQUIRED_MESSAGE.to_string(),
            AssessmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AssessmentError::InvalidState(msg) => format!("Invalid state: {}", msg),
            AssessmentError::Incomplete => {
                "Answer every question before requesting results".to_string()
            }
            AssessmentError::StaleResult => {
                "Answers changed while results were being prepared".to_string()
            }
            AssessmentError::Scoring(err) => format!("Scoring service error: {}", err),
            AssessmentError::Export(msg) => format!("Export failed: {}", msg),
            AssessmentError::Internal(msg) => format!("Error: {}", msg),
        }
    }

    /// Message safe to show the user. Provider details never leak.
    pub fn user_message(&self) -> String {
        match self {
            AssessmentError::Scoring(_) => SCORING_SERVICE_NOTICE.to_string(),
            AssessmentError::Internal(_) => "Something went wrong.".to_string(),
            other => other.message(),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ScoreRequired => AssessmentError::ScoreRequired,
            ErrorCode::ValidationFailed | ErrorCode::OutOfRange => {
                AssessmentError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::InvalidStateTransition => AssessmentError::InvalidState(err.message),
            ErrorCode::AssessmentIncomplete => AssessmentError::Incomplete,
            ErrorCode::StaleResult => AssessmentError::StaleResult,
            ErrorCode::ExportFailed => AssessmentError::Export(err.message),
            ErrorCode::AIProviderError | ErrorCode::InternalError => {
                AssessmentError::Internal(err.to_string())
            }
        }
    }
}

impl From<AIError> for AssessmentError {
    fn from(err: AIError) -> Self {
        AssessmentError::Scoring(err)
    }
}

impl From<ExportError> for AssessmentError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat(format) => AssessmentError::validation(
                "format",
                format!("Unsupported export format: {}", format),
            ),
            other => AssessmentError::Export(other.to_string()),
        }
    }
}
