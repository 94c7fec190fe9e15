//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Assessor providers (OpenAI, mock)
//! - `export` - CSV, Markdown and Excel exporters
//! - `http` - axum REST API

pub mod ai;
pub mod export;
pub mod http;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use export::{CsvAssessmentExporter, MarkdownAssessmentExporter, XlsxAssessmentExporter};
pub use http::{app_router, AssessmentHandlers};
