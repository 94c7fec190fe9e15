//! RestartAssessmentHandler - Command handler for starting over.

use crate::application::AssessmentHandle;
use crate::domain::foundation::Generation;

use super::AssessmentError;

/// Command to clear every answer and result.
#[derive(Debug, Clone, Default)]
pub struct RestartAssessmentCommand;

/// Handler for restarting.
pub struct RestartAssessmentHandler {
    handle: AssessmentHandle,
}

impl RestartAssessmentHandler {
    pub fn new(handle: AssessmentHandle) -> Self {
        Self { handle }
    }

    /// Returns the generation after the reset. Results still in flight for an
    /// earlier generation will be discarded.
    pub async fn handle(&self, _cmd: RestartAssessmentCommand) -> Result<Generation, AssessmentError> {
        let mut session = self.handle.write().await;
        session.reset();
        tracing::info!(
            assessment_id = %session.id(),
            generation = %session.generation(),
            "Assessment restarted"
        );
        Ok(session.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionItem;
    use crate::domain::assessment::AssessmentSession;
    use crate::domain::foundation::ReadinessScore;

    #[tokio::test]
    async fn restart_is_idempotent() {
        let mut session = AssessmentSession::from_items(&[QuestionItem::new("A", "q1")]);
        session.record_score(0, ReadinessScore::NotImplemented).unwrap();
        let handle = AssessmentHandle::new(session);
        let handler = RestartAssessmentHandler::new(handle.clone());

        let first = handler.handle(RestartAssessmentCommand).await.unwrap();
        let after_first = handle.read().await.clone();
        let second = handler.handle(RestartAssessmentCommand).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(*handle.read().await, after_first);
        assert!(handle.read().await.items()[0].score.is_none());
    }
}
