//! Catalog domain module.
//!
//! The static questionnaire: ordered sections of questions and the
//! flattening that turns them into the linear sequence of assessment items.

mod iso27001;
mod question;

pub use iso27001::iso27001_catalog;
pub use question::{flatten, CatalogSection, QuestionCatalog, QuestionItem};
