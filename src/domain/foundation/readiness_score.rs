//! Readiness score value object (0 to 3 implementation maturity scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Implementation maturity of a single control: 0 (not implemented) to 3 (fully implemented).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ReadinessScore {
    NotImplemented = 0,
    PartiallyImplemented = 1,
    MostlyImplemented = 2,
    FullyImplemented = 3,
}

impl ReadinessScore {
    /// All scores in ascending order.
    pub const ALL: [ReadinessScore; 4] = [
        ReadinessScore::NotImplemented,
        ReadinessScore::PartiallyImplemented,
        ReadinessScore::MostlyImplemented,
        ReadinessScore::FullyImplemented,
    ];

    /// Creates a ReadinessScore from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(ReadinessScore::NotImplemented),
            1 => Ok(ReadinessScore::PartiallyImplemented),
            2 => Ok(ReadinessScore::MostlyImplemented),
            3 => Ok(ReadinessScore::FullyImplemented),
            _ => Err(ValidationError::out_of_range("score", 0, 3, value as i64)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the implementation label without the number.
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessScore::NotImplemented => "Not Implemented",
            ReadinessScore::PartiallyImplemented => "Partially Implemented",
            ReadinessScore::MostlyImplemented => "Mostly Implemented",
            ReadinessScore::FullyImplemented => "Fully Implemented",
        }
    }

    /// Returns the label as shown to the user and embedded in prompts, e.g. `2 – Mostly Implemented`.
    pub fn display_label(&self) -> String {
        format!("{} – {}", self.value(), self.label())
    }
}

impl TryFrom<u8> for ReadinessScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<ReadinessScore> for u8 {
    fn from(score: ReadinessScore) -> Self {
        score.value()
    }
}

impl fmt::Display for ReadinessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
