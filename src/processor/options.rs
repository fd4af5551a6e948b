//! Processing options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for processing a document.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// What to do when a single page cannot be extracted
    pub error_mode: ErrorMode,

    /// Whether to clean and tokenize pages on the rayon pool
    pub parallel: bool,

    /// Which pages to process
    pub pages: PageSelection,
}

impl ProcessOptions {
    /// Create new process options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Fail the whole document when any page cannot be extracted.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Keep going past pages that cannot be extracted, leaving them empty.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable parallel page processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            parallel: true,
            pages: PageSelection::All,
        }
    }
}

/// Handling of pages whose text cannot be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort the document with a read error
    #[default]
    Strict,
    /// Log a warning and treat the page as empty
    Lenient,
}

/// Page selection for processing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed, ascending, no duplicates)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.binary_search(&page).is_ok(),
        }
    }

    /// Selected page numbers of a document with `page_count` pages, ascending.
    pub fn resolve(&self, page_count: u32) -> Vec<u32> {
        (1..=page_count).filter(|p| self.includes(*p)).collect()
    }

    /// Parse a page selection string (e.g., "3", "1-10", "1,3,5-7").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                return Ok(PageSelection::Range(parse_range(start, end)?));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                pages.extend(parse_range(start, end)?);
            } else {
                pages.push(parse_page(part)?);
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }
}

fn parse_page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err(Error::InvalidPageRange("pages are numbered from 1".to_string())),
        Ok(page) => Ok(page),
        Err(_) => Err(Error::InvalidPageRange(format!("'{}' is not a page number", s.trim()))),
    }
}

fn parse_range(start: &str, end: &str) -> Result<RangeInclusive<u32>> {
    let start = parse_page(start)?;
    let end = parse_page(end)?;
    if start > end {
        return Err(Error::InvalidPageRange(format!("{}-{} is descending", start, end)));
    }
    Ok(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_options_builder() {
        let options = ProcessOptions::new()
            .lenient()
            .sequential()
            .with_pages(PageSelection::Range(2..=4));

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert_eq!(options.clone().strict().error_mode, ErrorMode::Strict);
        assert!(!options.parallel);
        assert_eq!(options.pages, PageSelection::Range(2..=4));
    }

    #[test]
    fn test_default_options() {
        let options = ProcessOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.parallel);
        assert_eq!(options.pages, PageSelection::All);
    }

    #[test]
    fn test_page_selection_includes() {
        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3, 5, 7]);
        assert!(pages.includes(3));
        assert!(!pages.includes(2));
    }

    #[test]
    fn test_page_selection_resolve() {
        assert_eq!(PageSelection::All.resolve(3), vec![1, 2, 3]);
        assert_eq!(PageSelection::Range(2..=9).resolve(4), vec![2, 3, 4]);
        assert_eq!(PageSelection::Pages(vec![1, 8]).resolve(4), vec![1]);
        assert!(PageSelection::All.resolve(0).is_empty());
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("1-10").unwrap(), PageSelection::Range(1..=10));
        assert_eq!(PageSelection::parse("4").unwrap(), PageSelection::Pages(vec![4]));
        assert_eq!(
            PageSelection::parse("7, 1,3,5-7,10").unwrap(),
            PageSelection::Pages(vec![1, 3, 5, 6, 7, 10])
        );
    }

    #[test]
    fn test_page_selection_parse_errors() {
        for bad in ["0", "3-1", "a-b", "1,x", "2-"] {
            assert!(
                matches!(PageSelection::parse(bad), Err(Error::InvalidPageRange(_))),
                "{} should be rejected",
                bad
            );
        }
    }
}
