//! Data Transfer Objects for assessment endpoints.
//!
//! Request and response types decoupled from domain types.

use serde::{Deserialize, Serialize};

use crate::application::{AssessmentView, CurrentItemView, ResultsView};
use crate::domain::assessment::AssessmentStatus;
use crate::domain::foundation::ReadinessScore;
use crate::domain::scoring::ItemScore;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Request to answer the current item and advance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitStepRequest {
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Query parameters for export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQueryParams {
    pub format: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Full wizard state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub assessment_id: String,
    pub generation: u64,
    pub status: String,
    pub current_index: usize,
    pub total: usize,
    pub progress_percent: u8,
    pub current: Option<CurrentItemResponse>,
    pub score_options: Vec<ScoreOptionResponse>,
    pub results: Option<ResultsResponse>,
}

/// The item being answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentItemResponse {
    pub index: usize,
    pub section: String,
    pub question: String,
    pub score: Option<u8>,
    pub score_label: Option<String>,
    pub comment: String,
}

/// One selectable score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreOptionResponse {
    pub value: u8,
    pub label: String,
}

/// Both narratives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub generation: u64,
    pub score_result: String,
    pub summary_result: String,
    pub item_scores: Vec<ItemScoreResponse>,
    pub generated_at: String,
}

/// Scoring narrative for one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemScoreResponse {
    pub index: usize,
    pub question: String,
    pub narrative: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Conversions
// ════════════════════════════════════════════════════════════════════════════

fn status_name(status: &AssessmentStatus) -> &'static str {
    match status {
        AssessmentStatus::InProgress { .. } => "in_progress",
        AssessmentStatus::Complete => "complete",
    }
}

impl From<AssessmentView> for AssessmentResponse {
    fn from(view: AssessmentView) -> Self {
        Self {
            assessment_id: view.assessment_id.to_string(),
            generation: view.generation.value(),
            status: status_name(&view.status).to_string(),
            current_index: view.current_index,
            total: view.total,
            progress_percent: view.progress_percent,
            current: view.current_item.map(Into::into),
            score_options: ReadinessScore::ALL
                .iter()
                .map(|s| ScoreOptionResponse {
                    value: s.value(),
                    label: s.display_label(),
                })
                .collect(),
            results: view.results.map(Into::into),
        }
    }
}

impl From<CurrentItemView> for CurrentItemResponse {
    fn from(item: CurrentItemView) -> Self {
        Self {
            index: item.index,
            section: item.section,
            question: item.question,
            score: item.score.map(|s| s.value()),
            score_label: item.score.map(|s| s.display_label()),
            comment: item.comment,
        }
    }
}

impl From<ResultsView> for ResultsResponse {
    fn from(results: ResultsView) -> Self {
        Self {
            generation: results.generation.value(),
            score_result: results.score_result,
            summary_result: results.summary_result,
            item_scores: results.item_scores.into_iter().map(Into::into).collect(),
            generated_at: results.generated_at.to_rfc3339(),
        }
    }
}

impl From<ItemScore> for ItemScoreResponse {
    fn from(score: ItemScore) -> Self {
        Self {
            index: score.index,
            question: score.question,
            narrative: score.narrative,
        }
    }
}
