//! Scoring domain module.
//!
//! Turns a completed answer set into assessor prompts and holds the
//! narratives that come back.

mod prompt;
mod results;
mod strategy;

pub use prompt::{
    Prompt, PromptBuilder, PromptKind, PromptSet, ASSESSOR_ROLE, SCORING_MAX_TOKENS,
    SCORING_TEMPERATURE, SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE,
};
pub use results::{AssessmentResults, ItemScore};
pub use strategy::ScoringStrategy;
