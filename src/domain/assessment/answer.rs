//! Answer record for a single assessment item.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::QuestionItem;
use crate::domain::foundation::ReadinessScore;

/// The user's answer to one catalog item.
///
/// `score` is `None` until the user picks one; `comment` is optional evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub section: String,
    pub question: String,
    pub score: Option<ReadinessScore>,
    pub comment: String,
}

impl AnswerRecord {
    /// Creates an unanswered record for the given item.
    pub fn unanswered(item: &QuestionItem) -> Self {
        Self {
            section: item.section.clone(),
            question: item.question.clone(),
            score: None,
            comment: String::new(),
        }
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    /// True when neither a score nor a comment has been recorded.
    pub fn is_blank(&self) -> bool {
        self.score.is_none() && self.comment.is_empty()
    }

    /// Clears score and comment.
    pub fn clear(&mut self) {
        self.score = None;
        self.comment.clear();
    }

    /// Label used when embedding this answer in text.
    pub fn answer_label(&self) -> String {
        self.score
            .map(|s| s.display_label())
            .unwrap_or_else(|| "Not answered".to_string())
    }
}
