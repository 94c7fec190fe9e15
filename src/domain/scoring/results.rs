//! Scoring results returned by the external assessor.
//!
//! Narratives are free text from the language model. They are stored and
//! shown verbatim; nothing here parses the `Score:`/`Justification:` shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Generation;

/// Scoring narrative for one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemScore {
    /// Position of the item in the flattened catalog.
    pub index: usize,
    pub question: String,
    pub narrative: String,
}

/// Both narratives for one answer set. Only ever built once both requests succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    generation: Generation,
    scores: Vec<ItemScore>,
    summary: String,
    generated_at: DateTime<Utc>,
}

impl AssessmentResults {
    pub fn new(generation: Generation, scores: Vec<ItemScore>, summary: impl Into<String>) -> Self {
        Self {
            generation,
            scores,
            summary: summary.into(),
            generated_at: Utc::now(),
        }
    }

    /// The answer-set generation these results were computed from.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn scores(&self) -> &[ItemScore] {
        &self.scores
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn generated_at(&self) -> &DateTime<Utc> {
        &self.generated_at
    }

    /// The scoring narrative as a single display string.
    ///
    /// A lone narrative is returned as-is; several are prefixed with their question.
    pub fn score_text(&self) -> String {
        match self.scores.as_slice() {
            [only] => only.narrative.clone(),
            scores => scores
                .iter()
                .map(|s| format!("Q{}. {}\n{}", s.index + 1, s.question, s.narrative))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}
