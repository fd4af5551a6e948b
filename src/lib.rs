//! # sezi
//!
//! PDF text pipeline for speed reading.
//!
//! A PDF is read page by page, each page's text is cleaned up and split into
//! words and sentences, and the result is assembled into a [`Document`] with
//! aggregate [`DocumentStats`]. Words can be split for bionic reading, where
//! the first part of each word is emphasized.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sezi::process_file;
//!
//! fn main() -> sezi::Result<()> {
//!     let doc = process_file("book.pdf")?;
//!     let stats = doc.stats();
//!     println!("{} words, ~{} min", stats.total_words, stats.estimated_reading_time_minutes);
//!
//!     for sentence in doc.pages()[0].sentences() {
//!         println!("{}", sentence);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Text cleanup**: whitespace collapsing and line-break hyphen repair
//! - **Abbreviation-aware sentence splitting**: "Dr. Smith" stays one sentence
//! - **Bionic splitting**: emphasized word prefixes by word length
//! - **Parallel processing**: pages are tokenized with Rayon
//! - **Reader state**: settings, saved progress, and session statistics

pub mod detect;
pub mod error;
pub mod model;
pub mod processor;
pub mod reading;
pub mod render;
pub mod source;
pub mod text;

// Re-export commonly used types
pub use detect::{is_pdf_bytes, PdfHeader};
pub use error::{Error, Result};
pub use model::{Document, DocumentStats, Page};
pub use processor::{DocumentProcessor, ErrorMode, PageSelection, ProcessOptions};
pub use reading::{
    ReadingCursor, ReadingLog, ReadingMode, ReadingProgress, ReadingSession, ReadingSettings,
    ReadingSummary, SettingsUpdate,
};
pub use render::JsonFormat;
pub use source::{LopdfSource, PageTextSource, TextPages};
pub use text::{bionic_words, split, BionicSplit, BionicWord, TextCleaner, Tokenizer};

use std::path::Path;

/// Process a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use sezi::process_file;
///
/// let doc = process_file("book.pdf").unwrap();
/// println!("Pages: {}", doc.total_pages());
/// ```
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocumentProcessor::new().process(path)
}

/// Process a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use sezi::{process_file_with_options, PageSelection, ProcessOptions};
///
/// let options = ProcessOptions::new()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=10));
/// let doc = process_file_with_options("book.pdf", options).unwrap();
/// ```
pub fn process_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ProcessOptions,
) -> Result<Document> {
    DocumentProcessor::with_options(options).process(path)
}

/// Process a PDF held in memory. `file_path` is recorded on the document.
pub fn process_bytes(file_path: &str, data: &[u8]) -> Result<Document> {
    DocumentProcessor::new().process_bytes(file_path, data)
}

/// Aggregate statistics for a processed document.
pub fn document_stats(doc: &Document) -> DocumentStats {
    doc.stats()
}

/// Split one word for bionic reading.
///
/// ```
/// let parts = sezi::bionic("reading");
/// assert_eq!(parts.highlighted, "rea");
/// assert_eq!(parts.rest, "ding");
/// ```
pub fn bionic(word: &str) -> BionicSplit {
    split(word)
}

/// Process a PDF file and serialize it with its statistics to JSON.
///
/// # Example
///
/// ```no_run
/// use sezi::{to_json, JsonFormat};
///
/// let json = to_json("book.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("book.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = process_file(path)?;
    render::report_to_json(&doc, format)
}
