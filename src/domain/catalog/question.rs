//! Question catalog types and flattening.

use serde::{Deserialize, Serialize};

/// One assessment item: a question within its section.
///
/// Identity is the item's position in the flattened catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionItem {
    pub section: String,
    pub question: String,
}

impl QuestionItem {
    pub fn new(section: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            question: question.into(),
        }
    }
}

/// A titled group of questions, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub section: String,
    pub items: Vec<String>,
}

impl CatalogSection {
    pub fn new<I, S>(section: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            section: section.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Flattens sections into the linear item sequence the wizard walks.
///
/// Section order is kept, then item order within each section.
pub fn flatten(sections: &[CatalogSection]) -> Vec<QuestionItem> {
    sections
        .iter()
        .flat_map(|section| {
            section
                .items
                .iter()
                .map(move |question| QuestionItem::new(section.section.clone(), question.clone()))
        })
        .collect()
}

/// An ordered, immutable questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    sections: Vec<CatalogSection>,
}

impl QuestionCatalog {
    pub fn new(sections: Vec<CatalogSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    /// Returns the flattened item sequence.
    pub fn items(&self) -> Vec<QuestionItem> {
        flatten(&self.sections)
    }

    /// Total number of questions across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
