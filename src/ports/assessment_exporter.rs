//! Assessment Exporter Port - Tabular serialization of a session.
//!
//! Exporters write every answer record in catalog order under a fixed header
//! row. The numeric score is written (empty when unset), never the label.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assessment::AssessmentSession;

/// Base name of every exported file.
pub const EXPORT_BASENAME: &str = "iso27001-assessment";

/// Header row shared by every tabular format.
pub const EXPORT_HEADER: [&str; 5] = ["#", "Section", "Question", "Score", "Comment"];

/// Port for exporting an assessment to a downloadable document.
///
/// # Contract
///
/// Implementations must:
/// - Emit the header row followed by exactly one row per answer record
/// - Keep catalog order
/// - Leave the session untouched
pub trait AssessmentExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Writes the session to `sink`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if encoding fails or the sink rejects a write.
    fn write_to(&self, session: &AssessmentSession, sink: &mut dyn Write) -> Result<(), ExportError>;

    /// Exports the session into an in-memory document.
    fn export(&self, session: &AssessmentSession) -> Result<ExportedDocument, ExportError> {
        let mut content = Vec::new();
        self.write_to(session, &mut content)?;
        Ok(ExportedDocument::new(content, self.format(), EXPORT_BASENAME))
    }
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Markdown table plus stored narratives.
    Markdown,
    /// Excel workbook with a single worksheet.
    Xlsx,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format is not supported.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Encoding the rows failed.
    #[error("failed to encode export: {0}")]
    Encoding(String),

    /// The output sink rejected a write.
    #[error("export sink unavailable: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(f)) if f == "pdf"
        ));
    }

    #[test]
    fn exported_document_uses_deterministic_filename() {
        let doc = ExportedDocument::new(vec![], ExportFormat::Csv, EXPORT_BASENAME);
        assert_eq!(doc.filename, "iso27001-assessment.csv");
        assert_eq!(doc.content_type, "text/csv; charset=utf-8");

        let doc = ExportedDocument::new(vec![], ExportFormat::Markdown, EXPORT_BASENAME);
        assert_eq!(doc.filename, "iso27001-assessment.md");

        let doc = ExportedDocument::new(vec![], ExportFormat::Xlsx, EXPORT_BASENAME);
        assert_eq!(doc.filename, "iso27001-assessment.xlsx");
    }
}
