//! Export Adapters.
//!
//! Implementations of the AssessmentExporter port.
//!
//! - `CsvAssessmentExporter` - Spreadsheet-friendly CSV
//! - `MarkdownAssessmentExporter` - Markdown table plus narratives
//! - `XlsxAssessmentExporter` - Excel workbook

mod csv_exporter;
mod markdown_exporter;
mod xlsx_exporter;

pub use csv_exporter::CsvAssessmentExporter;
pub use markdown_exporter::MarkdownAssessmentExporter;
pub use xlsx_exporter::{XlsxAssessmentExporter, SHEET_NAME};

use std::sync::Arc;

use crate::ports::AssessmentExporter;

/// One exporter per supported format.
pub fn all_exporters() -> Vec<Arc<dyn AssessmentExporter>> {
    vec![
        Arc::new(CsvAssessmentExporter::new()),
        Arc::new(MarkdownAssessmentExporter::new()),
        Arc::new(XlsxAssessmentExporter::new()),
    ]
}
