//! Reading statistics across sessions.

use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Words read and time spent on one document on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSession {
    /// Document key (usually its file path)
    pub document: String,
    pub session_date: NaiveDate,
    pub words_read: u64,
    pub time_spent_seconds: u64,
}

/// Totals over a set of sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSummary {
    pub total_words: u64,
    pub total_time_seconds: u64,
    /// Number of distinct days with reading activity
    pub sessions: usize,
}

impl ReadingSummary {
    /// Average pace, if any time was recorded.
    pub fn words_per_minute(&self) -> Option<f64> {
        if self.total_time_seconds == 0 {
            return None;
        }
        Some(self.total_words as f64 * 60.0 / self.total_time_seconds as f64)
    }
}

/// Accumulates reading sessions; records for the same document and day are
/// merged into one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingLog {
    sessions: Vec<ReadingSession>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add reading activity for `document` on `date`.
    pub fn record(
        &mut self,
        document: &str,
        date: NaiveDate,
        words_read: u64,
        time_spent_seconds: u64,
    ) {
        match self
            .sessions
            .iter_mut()
            .find(|s| s.document == document && s.session_date == date)
        {
            Some(session) => {
                session.words_read += words_read;
                session.time_spent_seconds += time_spent_seconds;
            }
            None => self.sessions.push(ReadingSession {
                document: document.to_string(),
                session_date: date,
                words_read,
                time_spent_seconds,
            }),
        }
    }

    /// Add reading activity for `document` today (UTC).
    pub fn record_today(&mut self, document: &str, words_read: u64, time_spent_seconds: u64) {
        self.record(document, Utc::now().date_naive(), words_read, time_spent_seconds);
    }

    pub fn sessions(&self) -> &[ReadingSession] {
        &self.sessions
    }

    /// Forget every session of `document`.
    pub fn remove_document(&mut self, document: &str) {
        self.sessions.retain(|s| s.document != document);
    }

    /// Totals for one document, or for everything when `document` is `None`.
    pub fn summary(&self, document: Option<&str>) -> ReadingSummary {
        let mut summary = ReadingSummary::default();
        let mut days = BTreeSet::new();

        for session in self
            .sessions
            .iter()
            .filter(|s| document.map_or(true, |d| s.document == d))
        {
            summary.total_words += session.words_read;
            summary.total_time_seconds += session.time_spent_seconds;
            days.insert(session.session_date);
        }

        summary.sessions = days.len();
        summary
    }
}
