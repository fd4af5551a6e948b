//! Document-level types.

use super::Page;
use serde::{Deserialize, Serialize};

/// Average silent reading speed used for time estimates, in words per minute.
pub const AVERAGE_READING_WPM: f64 = 225.0;

/// A processed PDF document, ready for reading.
///
/// Built once per extraction run and not modified afterwards.
///
/// Deserialization only reads `file_path` and `pages`; `file_name` and
/// `total_pages` are derived again so they always agree with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentFields")]
pub struct Document {
    file_path: String,
    file_name: String,
    total_pages: u32,
    pages: Vec<Page>,
}

impl Document {
    /// Create a document from its pages, in page order.
    pub fn new(file_path: impl Into<String>, pages: Vec<Page>) -> Self {
        let file_path = file_path.into();
        let file_name = file_name_of(&file_path).to_string();
        Self {
            file_path,
            file_name,
            total_pages: pages.len() as u32,
            pages,
        }
    }

    /// Path the document was read from, as given by the caller.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Last path segment of `file_path`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_number: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.page_number() == page_number)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Aggregate statistics over all pages.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_document(self)
    }
}

#[derive(Deserialize)]
struct DocumentFields {
    file_path: String,
    pages: Vec<Page>,
}

impl From<DocumentFields> for Document {
    fn from(fields: DocumentFields) -> Self {
        Document::new(fields.file_path, fields.pages)
    }
}

/// Aggregate counts for a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub total_pages: u32,
    pub total_words: usize,
    pub total_sentences: usize,
    /// Sum of cleaned page text lengths, in characters
    pub total_characters: usize,
    /// `total_words / 225`, rounded to one decimal
    pub estimated_reading_time_minutes: f64,
}

impl DocumentStats {
    /// Compute statistics for `doc`.
    pub fn from_document(doc: &Document) -> Self {
        let total_words = doc.pages.iter().map(Page::word_count).sum();
        let total_sentences = doc.pages.iter().map(Page::sentence_count).sum();
        let total_characters = doc.pages.iter().map(Page::char_count).sum();

        Self {
            total_pages: doc.total_pages,
            total_words,
            total_sentences,
            total_characters,
            estimated_reading_time_minutes: reading_minutes(total_words),
        }
    }
}

/// Estimated minutes to read `words` at [`AVERAGE_READING_WPM`], one decimal.
pub fn reading_minutes(words: usize) -> f64 {
    round_one_decimal(words as f64 / AVERAGE_READING_WPM)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Final path segment after the last `/` or `\`, independent of host OS.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}
