//! GetAssessmentHandler - Query handler for the current wizard view.

use chrono::{DateTime, Utc};

use crate::application::AssessmentHandle;
use crate::domain::assessment::{AssessmentSession, AssessmentStatus};
use crate::domain::foundation::{AssessmentId, Generation, ReadinessScore};
use crate::domain::scoring::{AssessmentResults, ItemScore};

/// Query for the current view.
#[derive(Debug, Clone, Default)]
pub struct GetAssessmentQuery;

/// Everything the UI needs to render the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub generation: Generation,
    pub status: AssessmentStatus,
    pub current_index: usize,
    pub total: usize,
    pub progress_percent: u8,
    pub current_item: Option<CurrentItemView>,
    pub results: Option<ResultsView>,
}

/// The item being answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentItemView {
    pub index: usize,
    pub section: String,
    pub question: String,
    pub score: Option<ReadinessScore>,
    pub comment: String,
}

/// Stored narratives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub generation: Generation,
    pub score_result: String,
    pub summary_result: String,
    pub item_scores: Vec<ItemScore>,
    pub generated_at: DateTime<Utc>,
}

impl From<&AssessmentResults> for ResultsView {
    fn from(results: &AssessmentResults) -> Self {
        Self {
            generation: results.generation(),
            score_result: results.score_text(),
            summary_result: results.summary().to_string(),
            item_scores: results.scores().to_vec(),
            generated_at: *results.generated_at(),
        }
    }
}

impl From<&AssessmentSession> for AssessmentView {
    fn from(session: &AssessmentSession) -> Self {
        let current_index = session.current_index();
        Self {
            assessment_id: *session.id(),
            generation: session.generation(),
            status: session.status(),
            current_index,
            total: session.len(),
            progress_percent: session.progress_percent(),
            current_item: session.current_item().map(|item| CurrentItemView {
                index: current_index,
                section: item.section.clone(),
                question: item.question.clone(),
                score: item.score,
                comment: item.comment.clone(),
            }),
            results: session.results().map(ResultsView::from),
        }
    }
}

/// Handler for reading the current view.
pub struct GetAssessmentHandler {
    handle: AssessmentHandle,
}

impl GetAssessmentHandler {
    pub fn new(handle: AssessmentHandle) -> Self {
        Self { handle }
    }

    pub async fn handle(&self, _query: GetAssessmentQuery) -> AssessmentView {
        AssessmentView::from(&*self.handle.read().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::iso27001_catalog;

    #[tokio::test]
    async fn fresh_view_starts_at_first_question() {
        let handler = GetAssessmentHandler::new(AssessmentHandle::for_catalog(&iso27001_catalog()));

        let view = handler.handle(GetAssessmentQuery).await;

        assert_eq!(view.total, 57);
        assert_eq!(view.current_index, 0);
        assert_eq!(view.progress_percent, 0);
        assert_eq!(view.status, AssessmentStatus::InProgress { current_index: 0 });
        let item = view.current_item.unwrap();
        assert_eq!(item.section, "Management Commitment and Context");
        assert!(item.score.is_none());
        assert!(view.results.is_none());
    }
}
