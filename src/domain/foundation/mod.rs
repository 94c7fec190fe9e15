//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod readiness_score;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, Generation};
pub use readiness_score::ReadinessScore;
