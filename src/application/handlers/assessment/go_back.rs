//! GoBackHandler - Command handler for returning to the previous item.

use crate::application::AssessmentHandle;
use crate::domain::assessment::AssessmentStatus;

use super::AssessmentError;

/// Command to go back one item.
#[derive(Debug, Clone, Default)]
pub struct GoBackCommand;

/// Handler for going back.
pub struct GoBackHandler {
    handle: AssessmentHandle,
}

impl GoBackHandler {
    pub fn new(handle: AssessmentHandle) -> Self {
        Self { handle }
    }

    pub async fn handle(&self, _cmd: GoBackCommand) -> Result<AssessmentStatus, AssessmentError> {
        let mut session = self.handle.write().await;
        let status = session.retreat()?;
        tracing::debug!(item = session.current_index(), "Went back");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionItem;
    use crate::domain::assessment::AssessmentSession;
    use crate::domain::foundation::ReadinessScore;

    #[tokio::test]
    async fn goes_back_without_validating_current_item() {
        let mut session = AssessmentSession::from_items(&[
            QuestionItem::new("A", "q1"),
            QuestionItem::new("A", "q2"),
        ]);
        session.record_score(0, ReadinessScore::FullyImplemented).unwrap();
        session.advance().unwrap();
        let handle = AssessmentHandle::new(session);

        let status = GoBackHandler::new(handle.clone())
            .handle(GoBackCommand)
            .await
            .unwrap();

        assert_eq!(status, AssessmentStatus::InProgress { current_index: 0 });
    }

    #[tokio::test]
    async fn cannot_go_back_from_first_item() {
        let handle = AssessmentHandle::new(AssessmentSession::from_items(&[QuestionItem::new(
            "A", "q1",
        )]));

        let err = GoBackHandler::new(handle).handle(GoBackCommand).await.unwrap_err();

        assert!(matches!(err, AssessmentError::InvalidState(_)));
    }
}
