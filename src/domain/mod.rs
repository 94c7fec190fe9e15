//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, readiness score, errors)
//! - `catalog` - The static questionnaire and its flattening
//! - `assessment` - Assessment session state machine
//! - `scoring` - Prompt construction and scoring results

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod scoring;
