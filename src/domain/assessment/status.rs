//! Assessment wizard status.

use serde::Serialize;

/// Where the wizard currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// Answering the item at `current_index`.
    InProgress { current_index: usize },
    /// Every item has been scored and advanced past.
    Complete,
}

impl AssessmentStatus {
    /// Derives the status from a position within a catalog of `total` items.
    pub fn at(current_index: usize, total: usize) -> Self {
        if current_index >= total {
            AssessmentStatus::Complete
        } else {
            AssessmentStatus::InProgress { current_index }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, AssessmentStatus::Complete)
    }
}
