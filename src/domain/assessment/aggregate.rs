//! Assessment session aggregate.
//!
//! One user's walk through the question catalog. The session owns every
//! answer record and the results computed from them; nothing else mutates
//! them.
//!
//! # States
//!
//! - `InProgress(i)` for `0 <= i < N`
//! - `Complete` when `i == N`
//!
//! `advance` requires the current item to be scored. `retreat` never
//! validates. `reset` is valid everywhere and idempotent.

use serde::Serialize;

use crate::domain::catalog::{QuestionCatalog, QuestionItem};
use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, Generation, ReadinessScore, ValidationError,
};
use crate::domain::scoring::AssessmentResults;

use super::{AnswerRecord, AssessmentStatus};

/// Message shown when the user tries to move on without picking a score.
pub const SCORE_REQUIRED_MESSAGE: &str = "Please select a score.";

/// Assessment session aggregate.
///
/// # Invariants
///
/// - `current_index <= items.len()`
/// - every item before `current_index` was scored when it was advanced past
/// - `results`, when present, were computed from the current `generation`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSession {
    id: AssessmentId,
    generation: Generation,
    items: Vec<AnswerRecord>,
    current_index: usize,
    results: Option<AssessmentResults>,
}

/// Immutable copy of the answers a results request is issued against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSnapshot {
    pub assessment_id: AssessmentId,
    pub generation: Generation,
    pub answers: Vec<AnswerRecord>,
}

impl AssessmentSession {
    /// Starts a session over the given catalog with every item unanswered.
    pub fn new(catalog: &QuestionCatalog) -> Self {
        Self::from_items(&catalog.items())
    }

    /// Starts a session over an already flattened item sequence.
    pub fn from_items(items: &[QuestionItem]) -> Self {
        Self {
            id: AssessmentId::new(),
            generation: Generation::initial(),
            items: items.iter().map(AnswerRecord::unanswered).collect(),
            current_index: 0,
            results: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn items(&self) -> &[AnswerRecord] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn status(&self) -> AssessmentStatus {
        AssessmentStatus::at(self.current_index, self.items.len())
    }

    pub fn is_complete(&self) -> bool {
        self.status().is_complete()
    }

    /// The item being answered, or `None` once complete.
    pub fn current_item(&self) -> Option<&AnswerRecord> {
        self.items.get(self.current_index)
    }

    /// Rounded share of items advanced past, 0 to 100.
    pub fn progress_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 100;
        }
        ((self.current_index * 100 + self.items.len() / 2) / self.items.len()) as u8
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    /// The scoring narrative, if results are available.
    pub fn score_result(&self) -> Option<String> {
        self.results.as_ref().map(|r| r.score_text())
    }

    /// The summary narrative, if results are available.
    pub fn summary_result(&self) -> Option<&str> {
        self.results.as_ref().map(|r| r.summary())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the score of the item at `index`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index` is not a catalog position
    pub fn record_score(&mut self, index: usize, score: ReadinessScore) -> Result<(), DomainError> {
        let record = self.item_mut(index)?;
        if record.score == Some(score) {
            return Ok(());
        }
        record.score = Some(score);
        self.invalidate_results();
        Ok(())
    }

    /// Sets the comment of the item at `index`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index` is not a catalog position
    pub fn record_comment(&mut self, index: usize, comment: impl Into<String>) -> Result<(), DomainError> {
        let comment = comment.into();
        let record = self.item_mut(index)?;
        if record.comment == comment {
            return Ok(());
        }
        record.comment = comment;
        self.invalidate_results();
        Ok(())
    }

    /// Moves to the next item.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the session is already complete
    /// - `ScoreRequired` if the current item has no score; nothing changes
    pub fn advance(&mut self) -> Result<AssessmentStatus, DomainError> {
        let current = self.current_item().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Assessment is already complete",
            )
        })?;

        if !current.is_scored() {
            return Err(DomainError::new(ErrorCode::ScoreRequired, SCORE_REQUIRED_MESSAGE)
                .with_detail("index", self.current_index.to_string()));
        }

        self.current_index += 1;
        Ok(self.status())
    }

    /// Moves back to the previous item without validating the current one.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` at the first item or once complete
    pub fn retreat(&mut self) -> Result<AssessmentStatus, DomainError> {
        match self.status() {
            AssessmentStatus::Complete => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot go back from a completed assessment",
            )),
            AssessmentStatus::InProgress { current_index: 0 } => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Already at the first question",
            )),
            AssessmentStatus::InProgress { .. } => {
                self.current_index -= 1;
                Ok(self.status())
            }
        }
    }

    /// Clears every answer and result and returns to the first item.
    ///
    /// A session that is already pristine is left untouched, so calling this
    /// twice is the same as calling it once.
    pub fn reset(&mut self) {
        if self.is_pristine() {
            return;
        }
        self.items.iter_mut().for_each(AnswerRecord::clear);
        self.current_index = 0;
        self.results = None;
        self.generation = self.generation.next();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Results
    // ─────────────────────────────────────────────────────────────────────────

    /// Copies the answers for a results request.
    ///
    /// # Errors
    ///
    /// - `AssessmentIncomplete` unless every item has been advanced past
    pub fn answer_snapshot(&self) -> Result<AnswerSnapshot, DomainError> {
        if !self.is_complete() {
            return Err(DomainError::new(
                ErrorCode::AssessmentIncomplete,
                "Answer every question before requesting results",
            )
            .with_detail("current_index", self.current_index.to_string()));
        }

        Ok(AnswerSnapshot {
            assessment_id: self.id,
            generation: self.generation,
            answers: self.items.clone(),
        })
    }

    /// Stores results computed from a snapshot.
    ///
    /// # Errors
    ///
    /// - `StaleResult` if the answers changed (or the session was reset)
    ///   since the snapshot was taken; the session is left untouched
    pub fn apply_results(&mut self, results: AssessmentResults) -> Result<(), DomainError> {
        if results.generation() != self.generation {
            return Err(DomainError::new(
                ErrorCode::StaleResult,
                "Results belong to an earlier version of this assessment",
            )
            .with_detail("result_generation", results.generation().to_string())
            .with_detail("current_generation", self.generation.to_string()));
        }
        self.results = Some(results);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn item_mut(&mut self, index: usize) -> Result<&mut AnswerRecord, DomainError> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or_else(|| {
            ValidationError::out_of_range("index", 0, len as i64 - 1, index as i64).into()
        })
    }

    fn invalidate_results(&mut self) {
        self.results = None;
        self.generation = self.generation.next();
    }

    fn is_pristine(&self) -> bool {
        self.current_index == 0
            && self.results.is_none()
            && self.items.iter().all(AnswerRecord::is_blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogSection;
    use crate::domain::scoring::ItemScore;
    use proptest::prelude::*;

    fn catalog_2_1() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            CatalogSection::new("Access Control", ["Q1", "Q2"]),
            CatalogSection::new("Cryptography", ["Q3"]),
        ])
    }

    fn score(v: u8) -> ReadinessScore {
        ReadinessScore::try_from_u8(v).unwrap()
    }

    fn completed_session() -> AssessmentSession {
        let mut session = AssessmentSession::new(&catalog_2_1());
        for (i, v) in [0u8, 2, 3].into_iter().enumerate() {
            session.record_score(i, score(v)).unwrap();
            session.advance().unwrap();
        }
        session
    }

    fn results_for(session: &AssessmentSession) -> AssessmentResults {
        AssessmentResults::new(
            session.generation(),
            vec![ItemScore {
                index: 0,
                question: "Q1".to_string(),
                narrative: "Score: 0".to_string(),
            }],
            "summary",
        )
    }

    #[test]
    fn new_session_starts_unanswered_at_first_item() {
        let session = AssessmentSession::new(&catalog_2_1());
        assert_eq!(session.len(), 3);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.status(), AssessmentStatus::InProgress { current_index: 0 });
        assert!(session.items().iter().all(AnswerRecord::is_blank));
        assert!(session.results().is_none());
    }

    #[test]
    fn advance_without_score_fails_and_keeps_position() {
        let mut session = AssessmentSession::new(&catalog_2_1());
        let err = session.advance().unwrap_err();

        assert_eq!(err.code, ErrorCode::ScoreRequired);
        assert_eq!(err.message, SCORE_REQUIRED_MESSAGE);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn wizard_scenario_reaches_complete() {
        let mut session = AssessmentSession::new(&catalog_2_1());

        session.record_score(0, score(2)).unwrap();
        session.record_comment(0, "ok").unwrap();
        assert_eq!(
            session.advance().unwrap(),
            AssessmentStatus::InProgress { current_index: 1 }
        );

        let err = session.advance().unwrap_err();
        assert_eq!(err.code, ErrorCode::ScoreRequired);
        assert_eq!(session.current_index(), 1);

        session.record_score(1, score(0)).unwrap();
        session.advance().unwrap();

        session.record_score(2, score(3)).unwrap();
        assert_eq!(session.advance().unwrap(), AssessmentStatus::Complete);
        assert!(session.is_complete());
        assert!(session.current_item().is_none());
        assert_eq!(session.items()[0].comment, "ok");
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn advance_from_complete_is_invalid() {
        let mut session = completed_session();
        let err = session.advance().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn retreat_at_first_item_is_invalid() {
        let mut session = AssessmentSession::new(&catalog_2_1());
        let err = session.retreat().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn retreat_from_complete_is_invalid() {
        let mut session = completed_session();
        assert!(session.retreat().is_err());
        assert!(session.is_complete());
    }

    #[test]
    fn retreat_skips_validation_and_round_trips() {
        let mut session = AssessmentSession::new(&catalog_2_1());
        session.record_score(0, score(1)).unwrap();
        session.advance().unwrap();

        // Item 1 is unscored; going back is still fine.
        session.retreat().unwrap();
        assert_eq!(session.current_index(), 0);

        session.advance().unwrap();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn record_rejects_out_of_range_index() {
        let mut session = AssessmentSession::new(&catalog_2_1());
        let err = session.record_score(3, score(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);

        let err = session.record_comment(99, "x").unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[test]
    fn record_score_is_allowed_on_any_valid_index() {
        let mut session = AssessmentSession::new(&catalog_2_1());
        session.record_score(2, score(3)).unwrap();
        assert_eq!(session.items()[2].score, Some(score(3)));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = completed_session();
        let results = results_for(&session);
        session.apply_results(results).unwrap();

        session.reset();
        assert_eq!(session.current_index(), 0);
        assert!(session.items().iter().all(AnswerRecord::is_blank));
        assert!(session.results().is_none());
        assert!(session.score_result().is_none());
        assert!(session.summary_result().is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut once = completed_session();
        once.reset();
        let mut twice = once.clone();
        twice.reset();
        assert_eq!(once, twice);
    }

    #[test]
    fn reset_bumps_generation() {
        let mut session = completed_session();
        let before = session.generation();
        session.reset();
        assert!(session.generation() > before);
    }

    #[test]
    fn answer_snapshot_requires_completion() {
        let session = AssessmentSession::new(&catalog_2_1());
        let err = session.answer_snapshot().unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentIncomplete);
    }

    #[test]
    fn apply_results_exposes_both_narratives() {
        let mut session = completed_session();
        let results = results_for(&session);
        session.apply_results(results).unwrap();

        assert_eq!(session.score_result().as_deref(), Some("Score: 0"));
        assert_eq!(session.summary_result(), Some("summary"));
    }

    #[test]
    fn results_from_before_reset_are_rejected() {
        let mut session = completed_session();
        let snapshot = session.answer_snapshot().unwrap();

        session.reset();
        let late = AssessmentResults::new(snapshot.generation, vec![], "late summary");
        let err = session.apply_results(late).unwrap_err();

        assert_eq!(err.code, ErrorCode::StaleResult);
        assert!(session.results().is_none());
    }

    #[test]
    fn editing_an_answer_invalidates_results() {
        let mut session = completed_session();
        let results = results_for(&session);
        session.apply_results(results).unwrap();

        session.record_comment(1, "revised").unwrap();
        assert!(session.results().is_none());
    }

    #[test]
    fn rerecording_same_value_keeps_generation() {
        let mut session = completed_session();
        let generation = session.generation();
        session.record_score(0, score(0)).unwrap();
        session.record_comment(0, "").unwrap();
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn progress_rounds_to_percent() {
        let mut session = AssessmentSession::new(&catalog_2_1());
        assert_eq!(session.progress_percent(), 0);
        session.record_score(0, score(1)).unwrap();
        session.advance().unwrap();
        assert_eq!(session.progress_percent(), 33);
    }

    #[test]
    fn empty_catalog_is_immediately_complete() {
        let session = AssessmentSession::from_items(&[]);
        assert!(session.is_complete());
        assert!(session.answer_snapshot().unwrap().answers.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Action {
        Score(usize, u8),
        Comment(usize, String),
        Advance,
        Retreat,
        Reset,
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0usize..5, 0u8..4).prop_map(|(i, s)| Action::Score(i, s)),
            (0usize..5, "[a-z]{0,4}").prop_map(|(i, c)| Action::Comment(i, c)),
            Just(Action::Advance),
            Just(Action::Retreat),
            Just(Action::Reset),
        ]
    }

    proptest! {
        #[test]
        fn index_never_exceeds_catalog_and_unscored_never_advances(
            actions in prop::collection::vec(arb_action(), 0..40)
        ) {
            let mut session = AssessmentSession::new(&catalog_2_1());
            for action in actions {
                match action {
                    Action::Score(i, s) => { let _ = session.record_score(i, score(s)); }
                    Action::Comment(i, c) => { let _ = session.record_comment(i, c); }
                    Action::Advance => {
                        let before = session.current_index();
                        let scored = session.current_item().map(AnswerRecord::is_scored);
                        match session.advance() {
                            Ok(_) => {
                                prop_assert_eq!(scored, Some(true));
                                prop_assert_eq!(session.current_index(), before + 1);
                            }
                            Err(_) => prop_assert_eq!(session.current_index(), before),
                        }
                    }
                    Action::Retreat => { let _ = session.retreat(); }
                    Action::Reset => {
                        session.reset();
                        let once = session.clone();
                        session.reset();
                        prop_assert_eq!(&once, &session);
                    }
                }
                prop_assert!(session.current_index() <= session.len());
            }
        }
    }
}
