//! Which answers the scoring prompt is built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Scoring prompt granularity.
///
/// The summary prompt always covers every answer; this only governs scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// One scoring prompt built from the first answer only.
    FirstItem,
    /// One scoring prompt per answer, in catalog order.
    #[default]
    PerItem,
}

impl ScoringStrategy {
    /// Number of scoring requests issued for `item_count` answers.
    pub fn request_count(&self, item_count: usize) -> usize {
        match self {
            ScoringStrategy::FirstItem => item_count.min(1),
            ScoringStrategy::PerItem => item_count,
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringStrategy::FirstItem => write!(f, "first_item"),
            ScoringStrategy::PerItem => write!(f, "per_item"),
        }
    }
}

impl FromStr for ScoringStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_item" | "first" => Ok(ScoringStrategy::FirstItem),
            "per_item" | "each" => Ok(ScoringStrategy::PerItem),
            other => Err(ValidationError::invalid_format(
                "scoring_strategy",
                format!("unknown strategy '{}'", other),
            )),
        }
    }
}
