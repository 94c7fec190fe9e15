//! ExportAssessmentHandler - Query handler for downloading the session.

use std::sync::Arc;

use crate::application::AssessmentHandle;
use crate::ports::{AssessmentExporter, ExportError, ExportFormat, ExportedDocument};

use super::AssessmentError;

/// Query to export the session.
#[derive(Debug, Clone, Default)]
pub struct ExportAssessmentQuery {
    pub format: ExportFormat,
}

/// Handler for exports.
pub struct ExportAssessmentHandler {
    handle: AssessmentHandle,
    exporters: Vec<Arc<dyn AssessmentExporter>>,
}

impl ExportAssessmentHandler {
    pub fn new(handle: AssessmentHandle, exporters: Vec<Arc<dyn AssessmentExporter>>) -> Self {
        Self { handle, exporters }
    }

    pub async fn handle(&self, query: ExportAssessmentQuery) -> Result<ExportedDocument, AssessmentError> {
        let exporter = self
            .exporters
            .iter()
            .find(|e| e.format() == query.format)
            .ok_or_else(|| ExportError::UnsupportedFormat(query.format.to_string()))?;

        let session = self.handle.read().await;
        let document = exporter.export(&session).map_err(|err| {
            tracing::error!(format = %query.format, error = %err, "Export failed");
            AssessmentError::from(err)
        })?;

        tracing::debug!(
            format = %query.format,
            bytes = document.content.len(),
            "Assessment exported"
        );
        Ok(document)
    }
}
