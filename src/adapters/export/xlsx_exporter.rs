//! Excel exporter - Implementation of AssessmentExporter using `rust_xlsxwriter`.
//!
//! A single "Assessment" worksheet holding the header row and one row per
//! answer record. Item numbers and scores are numeric cells; an unset score
//! or empty comment is left blank.

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::domain::assessment::{AnswerRecord, AssessmentSession};
use crate::ports::{AssessmentExporter, ExportError, ExportFormat, EXPORT_HEADER};

/// Name of the only worksheet in the workbook.
pub const SHEET_NAME: &str = "Assessment";

const COLUMN_WIDTHS: [f64; 5] = [6.0, 40.0, 80.0, 8.0, 60.0];

/// Writes an assessment as an `.xlsx` workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxAssessmentExporter;

impl XlsxAssessmentExporter {
    pub fn new() -> Self {
        Self
    }

    fn workbook(session: &AssessmentSession) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        for (col, (title, width)) in (0u16..).zip(EXPORT_HEADER.into_iter().zip(COLUMN_WIDTHS)) {
            sheet.set_column_width(col, width)?;
            sheet.write_string_with_format(0, col, title, &header)?;
        }

        // Row numbers start under the header, so they double as item numbers.
        for (row, record) in (1u32..).zip(session.items()) {
            Self::write_row(sheet, row, record)?;
        }

        workbook.save_to_buffer()
    }

    fn write_row(sheet: &mut Worksheet, row: u32, record: &AnswerRecord) -> Result<(), XlsxError> {
        sheet.write_number(row, 0, row)?;
        sheet.write_string(row, 1, record.section.as_str())?;
        sheet.write_string(row, 2, record.question.as_str())?;
        if let Some(score) = record.score {
            sheet.write_number(row, 3, score.value())?;
        }
        if !record.comment.is_empty() {
            sheet.write_string(row, 4, record.comment.as_str())?;
        }
        Ok(())
    }
}

impl AssessmentExporter for XlsxAssessmentExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn write_to(&self, session: &AssessmentSession, sink: &mut dyn Write) -> Result<(), ExportError> {
        let bytes =
            Self::workbook(session).map_err(|err| ExportError::Encoding(err.to_string()))?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }
}
