//! Assessment domain module.
//!
//! The questionnaire state machine: answer records, the current position,
//! and the generation tag that guards results against stale answers.

mod aggregate;
mod answer;
mod status;

pub use aggregate::{AnswerSnapshot, AssessmentSession, SCORE_REQUIRED_MESSAGE};
pub use answer::AnswerRecord;
pub use status::AssessmentStatus;
