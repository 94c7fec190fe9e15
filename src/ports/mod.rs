//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - The external assessor (text completion)
//! - `AssessmentExporter` - Tabular serialization of a session

mod ai_provider;
mod assessment_exporter;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use assessment_exporter::{
    AssessmentExporter, ExportError, ExportFormat, ExportedDocument, EXPORT_BASENAME,
    EXPORT_HEADER,
};
