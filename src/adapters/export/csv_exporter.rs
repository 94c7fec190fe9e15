//! CSV exporter - Implementation of AssessmentExporter using the `csv` crate.
//!
//! One header row followed by one row per answer record. Fields containing
//! commas, quotes, or newlines are quoted by the writer.

use std::io::Write;

use crate::domain::assessment::{AnswerRecord, AssessmentSession};
use crate::ports::{AssessmentExporter, ExportError, ExportFormat, EXPORT_HEADER};

/// Writes an assessment as RFC 4180 CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvAssessmentExporter;

impl CsvAssessmentExporter {
    pub fn new() -> Self {
        Self
    }

    fn row(index: usize, record: &AnswerRecord) -> [String; 5] {
        [
            (index + 1).to_string(),
            record.section.clone(),
            record.question.clone(),
            record.score.map(|s| s.value().to_string()).unwrap_or_default(),
            record.comment.clone(),
        ]
    }
}

impl AssessmentExporter for CsvAssessmentExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write_to(&self, session: &AssessmentSession, sink: &mut dyn Write) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(sink);

        writer.write_record(EXPORT_HEADER).map_err(csv_error)?;
        for (index, record) in session.items().iter().enumerate() {
            writer
                .write_record(Self::row(index, record))
                .map_err(csv_error)?;
        }
        writer.flush()?;

        Ok(())
    }
}

fn csv_error(err: csv::Error) -> ExportError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ExportError::Io(io),
        other => ExportError::Encoding(format!("{:?}", other)),
    }
}
