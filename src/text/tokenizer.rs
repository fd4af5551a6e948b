//! Word and sentence segmentation.
//!
//! There is no language model behind sentence detection. Terminal
//! punctuation (`.`, `!`, `?`) followed by whitespace ends a sentence, except
//! for the period of a known abbreviation such as `Dr.` or `e.g.`. Those
//! periods are swapped for a placeholder before splitting and restored
//! afterwards, so results do not depend on regex lookaround support.

use std::collections::BTreeSet;

use regex::Regex;

/// Abbreviations whose trailing period never ends a sentence.
///
/// Matching is case-sensitive and anchored on a word boundary to the left.
pub const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "vs", "etc", "e.g", "i.e", "Inc", "Ltd", "Co",
    "Corp", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "St",
    "Ave", "Blvd",
];

/// Stands in for a protected abbreviation period while splitting.
const PERIOD_PLACEHOLDER: char = '\u{E000}';

/// Splits cleaned page text into words and sentences.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// One pattern per abbreviation, so overlapping ones ("i.e.g.") all match
    abbreviation_regexes: Vec<Regex>,
    boundary_regex: Regex,
}

impl Tokenizer {
    /// Create a tokenizer for the built-in abbreviation set.
    pub fn new() -> Self {
        let abbreviation_regexes = ABBREVIATIONS
            .iter()
            .map(|abbr| Regex::new(&format!(r"\b{}\.", regex::escape(abbr))).unwrap())
            .collect();

        Self {
            abbreviation_regexes,
            // A run of terminators, then whitespace or the end of the text.
            boundary_regex: Regex::new(r"[.!?]+(?:\s+|$)").unwrap(),
        }
    }

    /// Split text into whitespace-delimited words.
    ///
    /// Punctuation stays attached to its word.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    /// Split text into sentences.
    ///
    /// Terminators are consumed by the split and never appear at the end of
    /// a returned sentence. Text without any boundary comes back as a single
    /// trimmed sentence.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let protected = self.protect_abbreviations(text);

        let sentences: Vec<String> = self
            .boundary_regex
            .split(&protected)
            .map(restore_abbreviations)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            // Nothing but terminators, e.g. "?!"
            return vec![trimmed.to_string()];
        }

        sentences
    }

    /// Number of words in `text`, without allocating them.
    pub fn word_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Swap every abbreviation-ending period for the placeholder. Matches
    /// are collected against the original text, so one abbreviation never
    /// hides another.
    fn protect_abbreviations(&self, text: &str) -> String {
        let periods: BTreeSet<usize> = self
            .abbreviation_regexes
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.end() - 1))
            .collect();

        text.char_indices()
            .map(|(i, c)| {
                if periods.contains(&i) {
                    PERIOD_PLACEHOLDER
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn restore_abbreviations(fragment: &str) -> String {
    fragment.replace(PERIOD_PLACEHOLDER, ".")
}

/// Whether `token` is one of the protected abbreviations (without its period).
pub fn is_abbreviation(token: &str) -> bool {
    ABBREVIATIONS.contains(&token)
}
