//! Document processing: raw page text in, tokenized [`Document`] out.

mod options;

pub use options::{ErrorMode, PageSelection, ProcessOptions};

use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Document, DocumentStats, Page};
use crate::source::{LopdfSource, PageTextSource};
use crate::text::{TextCleaner, Tokenizer};

/// Turns PDFs into documents of cleaned, tokenized pages.
///
/// Holds no per-document state; one processor can serve any number of
/// documents, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct DocumentProcessor {
    options: ProcessOptions,
    cleaner: TextCleaner,
    tokenizer: Tokenizer,
}

impl DocumentProcessor {
    /// Create a processor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom options.
    pub fn with_options(options: ProcessOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Process the PDF at `path`.
    ///
    /// Any failure to open or parse the file is reported as
    /// [`Error::DocumentRead`]; no partial document is returned.
    pub fn process<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        let file_path = path.to_string_lossy().into_owned();
        let source = LopdfSource::open(path).map_err(|e| Error::document_read(&*file_path, e))?;
        self.process_source(&file_path, &source)
    }

    /// Process a PDF held in memory. `file_path` is recorded on the document.
    pub fn process_bytes(&self, file_path: &str, data: &[u8]) -> Result<Document> {
        let source = LopdfSource::from_bytes(data).map_err(|e| Error::document_read(file_path, e))?;
        self.process_source(file_path, &source)
    }

    /// Process pages from any text source.
    pub fn process_source<S>(&self, file_path: &str, source: &S) -> Result<Document>
    where
        S: PageTextSource + ?Sized,
    {
        let page_numbers = self.options.pages.resolve(source.page_count());
        log::debug!(
            "Processing {} ({} of {} pages)",
            file_path,
            page_numbers.len(),
            source.page_count()
        );

        let mut raw_pages = Vec::with_capacity(page_numbers.len());
        for page_number in page_numbers {
            let raw = self.extract_page(file_path, source, page_number)?;
            raw_pages.push((page_number, raw));
        }

        let pages: Vec<Page> = if self.options.parallel {
            raw_pages
                .par_iter()
                .map(|(number, raw)| self.build_page(*number, raw))
                .collect()
        } else {
            raw_pages
                .iter()
                .map(|(number, raw)| self.build_page(*number, raw))
                .collect()
        };

        Ok(Document::new(file_path, pages))
    }

    /// Aggregate statistics for a processed document.
    pub fn stats(&self, doc: &Document) -> DocumentStats {
        doc.stats()
    }

    fn extract_page<S>(&self, file_path: &str, source: &S, page_number: u32) -> Result<String>
    where
        S: PageTextSource + ?Sized,
    {
        match source.page_text(page_number) {
            Ok(raw) => {
                if raw.trim().is_empty() {
                    log::debug!("{}: page {} has no extractable text", file_path, page_number);
                }
                Ok(raw)
            }
            Err(e) => match self.options.error_mode {
                ErrorMode::Strict => Err(Error::document_read(file_path, e)),
                ErrorMode::Lenient => {
                    log::warn!(
                        "{}: failed to extract text from page {}: {}",
                        file_path,
                        page_number,
                        e
                    );
                    Ok(String::new())
                }
            },
        }
    }

    fn build_page(&self, page_number: u32, raw: &str) -> Page {
        let page = Page::from_raw(page_number, raw, &self.cleaner, &self.tokenizer);
        log::trace!(
            "page {}: {} words, {} sentences",
            page_number,
            page.word_count(),
            page.sentence_count()
        );
        page
    }
}
