//! Markdown exporter - a pipe table of answers followed by stored narratives.

use std::io::Write;

use crate::domain::assessment::{AnswerRecord, AssessmentSession};
use crate::ports::{AssessmentExporter, ExportError, ExportFormat, EXPORT_HEADER};

/// Document title.
const TITLE: &str = "ISO 27001 Readiness Assessment";

/// Writes an assessment as a Markdown document.
///
/// ```text
/// # ISO 27001 Readiness Assessment
///
/// | # | Section | Question | Score | Comment |
/// |---|---|---|---|---|
/// | 1 | ... | ... | 2 | ... |
///
/// ## Scoring        (only when results are present)
/// ## Summary
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownAssessmentExporter;

impl MarkdownAssessmentExporter {
    pub fn new() -> Self {
        Self
    }

    fn row(index: usize, record: &AnswerRecord) -> String {
        let score = record.score.map(|s| s.value().to_string()).unwrap_or_default();
        format!(
            "| {} | {} | {} | {} | {} |",
            index + 1,
            escape_cell(&record.section),
            escape_cell(&record.question),
            score,
            escape_cell(&record.comment),
        )
    }
}

impl AssessmentExporter for MarkdownAssessmentExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn write_to(&self, session: &AssessmentSession, sink: &mut dyn Write) -> Result<(), ExportError> {
        writeln!(sink, "# {}", TITLE)?;
        writeln!(sink)?;
        writeln!(sink, "| {} |", EXPORT_HEADER.join(" | "))?;
        writeln!(sink, "|{}", "---|".repeat(EXPORT_HEADER.len()))?;

        for (index, record) in session.items().iter().enumerate() {
            writeln!(sink, "{}", Self::row(index, record))?;
        }

        if let Some(results) = session.results() {
            writeln!(sink)?;
            writeln!(sink, "## Scoring")?;
            writeln!(sink)?;
            writeln!(sink, "{}", results.score_text())?;
            writeln!(sink)?;
            writeln!(sink, "## Summary")?;
            writeln!(sink)?;
            writeln!(sink, "{}", results.summary())?;
        }

        sink.flush()?;
        Ok(())
    }
}

/// Keeps a cell on one line and stops pipes from splitting it.
fn escape_cell(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionItem;
    use crate::domain::foundation::ReadinessScore;
    use crate::domain::scoring::{AssessmentResults, ItemScore};

    fn session() -> AssessmentSession {
        AssessmentSession::from_items(&[
            QuestionItem::new("Policies", "Is there a policy?"),
            QuestionItem::new("Assets", "Is there an inventory?"),
        ])
    }

    fn export_string(session: &AssessmentSession) -> String {
        let doc = MarkdownAssessmentExporter::new().export(session).unwrap();
        String::from_utf8(doc.content).unwrap()
    }

    #[test]
    fn table_has_one_row_per_item() {
        let md = export_string(&session());
        let rows: Vec<&str> = md.lines().filter(|l| l.starts_with("| ")).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "| # | Section | Question | Score | Comment |");
        assert_eq!(rows[2], "| 2 | Assets | Is there an inventory? |  |  |");
        assert!(!md.contains("## Summary"));
    }

    #[test]
    fn cells_are_escaped() {
        let mut session = session();
        session.record_score(0, ReadinessScore::FullyImplemented).unwrap();
        session.record_comment(0, "a | b\nc").unwrap();

        let md = export_string(&session);
        assert!(md.contains("| 1 | Policies | Is there a policy? | 3 | a \\| b<br>c |"));
    }

    #[test]
    fn narratives_follow_the_table_when_present() {
        let mut session = session();
        for i in 0..2 {
            session.record_score(i, ReadinessScore::PartiallyImplemented).unwrap();
            session.advance().unwrap();
        }
        let generation = session.generation();
        session
            .apply_results(AssessmentResults::new(
                generation,
                vec![ItemScore {
                    index: 0,
                    question: "Is there a policy?".to_string(),
                    narrative: "Score: 1\nJustification: thin".to_string(),
                }],
                "Overall weak.",
            ))
            .unwrap();

        let md = export_string(&session);
        let scoring = md.find("## Scoring").unwrap();
        let summary = md.find("## Summary").unwrap();

        assert!(scoring < summary);
        assert!(md.contains("Score: 1\nJustification: thin"));
        assert!(md.trim_end().ends_with("Overall weak."));
    }

    #[test]
    fn document_metadata_is_markdown() {
        let doc = MarkdownAssessmentExporter::new().export(&session()).unwrap();
        assert_eq!(doc.filename, "iso27001-assessment.md");
        assert_eq!(doc.content_type, "text/markdown; charset=utf-8");
    }
}
