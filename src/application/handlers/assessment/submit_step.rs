//! SubmitStepHandler - Command handler for answering the current item and moving on.

use crate::application::AssessmentHandle;
use crate::domain::assessment::AssessmentStatus;
use crate::domain::foundation::{DomainError, Generation, ReadinessScore};

use super::AssessmentError;

/// Command to answer the current item and advance.
///
/// A missing `score` keeps whatever score the item already has. A missing
/// `comment` keeps the stored comment.
#[derive(Debug, Clone, Default)]
pub struct SubmitStepCommand {
    pub score: Option<u8>,
    pub comment: Option<String>,
}

/// Result of a successful step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitStepResult {
    pub answered_index: usize,
    pub status: AssessmentStatus,
    pub generation: Generation,
}

/// Handler for submitting a step.
pub struct SubmitStepHandler {
    handle: AssessmentHandle,
}

impl SubmitStepHandler {
    pub fn new(handle: AssessmentHandle) -> Self {
        Self { handle }
    }

    /// Records the answer and advances. Nothing changes if any part fails.
    pub async fn handle(&self, cmd: SubmitStepCommand) -> Result<SubmitStepResult, AssessmentError> {
        let score = cmd
            .score
            .map(ReadinessScore::try_from_u8)
            .transpose()
            .map_err(DomainError::from)?;

        let result = self
            .handle
            .update(|session| {
                if session.is_complete() {
                    return Err(AssessmentError::invalid_state(
                        "Assessment is already complete",
                    ));
                }

                let index = session.current_index();
                if let Some(score) = score {
                    session.record_score(index, score)?;
                }
                if let Some(comment) = cmd.comment {
                    session.record_comment(index, comment)?;
                }
                let status = session.advance()?;

                Ok(SubmitStepResult {
                    answered_index: index,
                    status,
                    generation: session.generation(),
                })
            })
            .await;

        match &result {
            Ok(step) => tracing::debug!(
                item = step.answered_index,
                generation = %step.generation,
                complete = step.status.is_complete(),
                "Step submitted"
            ),
            Err(err) => tracing::debug!(code = %err.code(), "Step rejected"),
        }

        result
    }
}
