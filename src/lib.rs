//! ISO 27001 Readiness Assessor
//!
//! Walks a user through a fixed ISO 27001 questionnaire, collects a 0-3
//! readiness score and comment per control, and asks an external language
//! model for a scoring narrative and an executive summary.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
