//! Reading position within a document.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Document, Page};

/// Unit shown to the reader at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    /// One word at a time
    #[default]
    Word,
    /// One sentence at a time
    Sentence,
}

impl ReadingMode {
    /// The units of `page` in this mode.
    pub fn units<'a>(&self, page: &'a Page) -> &'a [String] {
        match self {
            ReadingMode::Word => page.words(),
            ReadingMode::Sentence => page.sentences(),
        }
    }
}

impl std::fmt::Display for ReadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingMode::Word => write!(f, "word"),
            ReadingMode::Sentence => write!(f, "sentence"),
        }
    }
}

/// Saved reading position for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingProgress {
    /// Page number (1-indexed)
    pub current_page: u32,
    /// Index of the current unit within the page
    pub current_position: usize,
    pub reading_mode: ReadingMode,
    pub completed: bool,
    pub last_updated: DateTime<Utc>,
}

impl Default for ReadingProgress {
    fn default() -> Self {
        Self {
            current_page: 1,
            current_position: 0,
            reading_mode: ReadingMode::Word,
            completed: false,
            last_updated: Utc::now(),
        }
    }
}

/// How long to show `unit` at `wpm` words per minute.
///
/// A sentence stays up for as many word intervals as it has words.
pub fn dwell_time(unit: &str, mode: ReadingMode, wpm: u32) -> Duration {
    let per_word = Duration::from_millis(60_000 / u64::from(wpm.max(1)));
    match mode {
        ReadingMode::Word => per_word,
        ReadingMode::Sentence => {
            let words = unit.split_whitespace().count().max(1) as u32;
            per_word * words
        }
    }
}

/// Walks the words or sentences of a document in reading order.
///
/// The cursor treats the document as one continuous sequence of units;
/// pages without units are skipped. Once past the last unit the cursor is
/// finished and stays on the last page.
#[derive(Debug, Clone)]
pub struct ReadingCursor<'a> {
    doc: &'a Document,
    mode: ReadingMode,
    /// First unit index of each page
    page_starts: Vec<usize>,
    total: usize,
    index: usize,
}

impl<'a> ReadingCursor<'a> {
    /// Start at the beginning of `doc`.
    pub fn new(doc: &'a Document, mode: ReadingMode) -> Self {
        let mut page_starts = Vec::with_capacity(doc.pages().len());
        let mut total = 0;
        for page in doc.pages() {
            page_starts.push(total);
            total += mode.units(page).len();
        }

        Self {
            doc,
            mode,
            page_starts,
            total,
            index: 0,
        }
    }

    /// Resume from saved progress, clamping positions that no longer fit.
    pub fn from_progress(doc: &'a Document, progress: &ReadingProgress) -> Self {
        let mut cursor = Self::new(doc, progress.reading_mode);
        if progress.completed {
            cursor.index = cursor.total;
            return cursor;
        }

        let target = doc
            .pages()
            .iter()
            .position(|p| p.page_number() >= progress.current_page);
        cursor.index = match target {
            Some(i) if doc.pages()[i].page_number() == progress.current_page => {
                cursor.page_starts[i] + progress.current_position.min(cursor.page_len(i))
            }
            Some(i) => cursor.page_starts[i],
            None => cursor.total,
        };
        cursor
    }

    pub fn mode(&self) -> ReadingMode {
        self.mode
    }

    /// Total units in the document.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The unit under the cursor, or `None` once finished.
    pub fn current(&self) -> Option<&'a str> {
        if self.index >= self.total {
            return None;
        }
        let page_index = self.page_index()?;
        let page = &self.doc.pages()[page_index];
        self.mode
            .units(page)
            .get(self.index - self.page_starts[page_index])
            .map(String::as_str)
    }

    /// Page number the cursor is on.
    pub fn page_number(&self) -> Option<u32> {
        self.page_index()
            .map(|i| self.doc.pages()[i].page_number())
    }

    /// Unit index within the current page.
    pub fn position(&self) -> usize {
        self.page_index()
            .map(|i| self.index - self.page_starts[i])
            .unwrap_or(0)
    }

    /// Move forward `n` units. Returns the new current unit.
    pub fn advance(&mut self, n: usize) -> Option<&'a str> {
        self.index = self.index.saturating_add(n).min(self.total);
        self.current()
    }

    /// Move back `n` units. Returns the new current unit.
    pub fn rewind(&mut self, n: usize) -> Option<&'a str> {
        self.index = self.index.saturating_sub(n);
        self.current()
    }

    /// Jump to `position` on page `page_number`; the position is clamped to
    /// the page.
    pub fn seek(&mut self, page_number: u32, position: usize) -> Result<()> {
        let page_index = self
            .doc
            .pages()
            .iter()
            .position(|p| p.page_number() == page_number)
            .ok_or(Error::PageOutOfRange(page_number, self.doc.total_pages()))?;
        self.index = self.page_starts[page_index] + position.min(self.page_len(page_index));
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.total
    }

    /// Share of units already passed, from 0.0 to 1.0.
    pub fn fraction_read(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.index as f64 / self.total as f64
    }

    /// Snapshot the position for saving.
    pub fn to_progress(&self) -> ReadingProgress {
        ReadingProgress {
            current_page: self.page_number().unwrap_or(1),
            current_position: self.position(),
            reading_mode: self.mode,
            completed: self.is_finished(),
            last_updated: Utc::now(),
        }
    }

    fn page_len(&self, page_index: usize) -> usize {
        self.mode.units(&self.doc.pages()[page_index]).len()
    }

    /// Last page whose first unit is at or before the cursor. Skips empty
    /// pages, which share their start with the following page.
    fn page_index(&self) -> Option<usize> {
        self.page_starts
            .partition_point(|&start| start <= self.index)
            .checked_sub(1)
    }
}

impl<'a> Iterator for ReadingCursor<'a> {
    type Item = &'a str;

    /// Yield the current unit and step past it.
    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.current()?;
        self.index += 1;
        Some(unit)
    }
}
