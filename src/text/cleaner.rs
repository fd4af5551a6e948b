//! Normalization of raw extracted page text.

use regex::Regex;

/// Cleans raw page text before tokenization.
///
/// Two stages, always in this order:
///
/// 1. Every whitespace run (spaces, tabs, newlines) becomes a single space and
///    the result is trimmed.
/// 2. Line-break hyphenation is repaired: a word character, `-`, whitespace,
///    then a word character are joined (`"exam- ple"` → `"example"`).
///
/// The hyphen repair is a single left-to-right pass over non-overlapping
/// matches. Text produced by a join is not scanned again, so `clean` is not
/// idempotent for chains such as `"a- b- c"`.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    whitespace_regex: Regex,
    hyphen_break_regex: Regex,
}

impl TextCleaner {
    /// Create a cleaner.
    pub fn new() -> Self {
        Self {
            whitespace_regex: Regex::new(r"\s+").unwrap(),
            hyphen_break_regex: Regex::new(r"(\w)-\s+(\w)").unwrap(),
        }
    }

    /// Clean one page of raw text.
    pub fn clean(&self, raw: &str) -> String {
        let collapsed = self.whitespace_regex.replace_all(raw, " ");
        let trimmed = collapsed.trim();
        self.hyphen_break_regex
            .replace_all(trimmed, "${1}${2}")
            .into_owned()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
