//! Page text sources.
//!
//! The processor only needs two things from a PDF library: how many pages
//! there are, and the raw text of a given page. [`PageTextSource`] captures
//! that, keeping the concrete library (lopdf) out of the text pipeline.

mod lopdf_source;

pub use lopdf_source::LopdfSource;

use crate::error::{Error, Result};

/// Per-page raw text access.
pub trait PageTextSource {
    /// Number of pages in the source.
    fn page_count(&self) -> u32;

    /// Raw text of a page (1-indexed).
    ///
    /// A page without extractable text yields `Ok(String::new())`. An `Err`
    /// means the page could not be read at all.
    fn page_text(&self, page_number: u32) -> Result<String>;
}

/// Pages whose raw text is already in memory.
///
/// Useful when text comes from another extraction tool, and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPages {
    pages: Vec<String>,
}

impl TextPages {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageTextSource for TextPages {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page_number: u32) -> Result<String> {
        page_number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i as usize))
            .cloned()
            .ok_or(Error::PageOutOfRange(page_number, self.page_count()))
    }
}
