//! Bionic reading splits.
//!
//! The first part of each word is emphasized so the eye can anchor on it and
//! skip ahead. How much is emphasized depends only on the word's length in
//! characters.

use serde::{Deserialize, Serialize};

/// A word split into its emphasized prefix and the remainder.
///
/// `highlighted + rest` always reproduces the original word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BionicSplit {
    /// Emphasized prefix
    pub highlighted: String,
    /// Remaining characters
    pub rest: String,
}

impl BionicSplit {
    /// Reassemble the original word.
    pub fn word(&self) -> String {
        format!("{}{}", self.highlighted, self.rest)
    }
}

/// A word together with its split, as served to reading clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BionicWord {
    /// Original word
    pub word: String,
    /// Emphasized prefix
    pub highlighted: String,
    /// Remaining characters
    pub rest: String,
}

impl BionicWord {
    /// Split a single word.
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let BionicSplit { highlighted, rest } = split(&word);
        Self {
            word,
            highlighted,
            rest,
        }
    }
}

/// Number of characters to emphasize for a word of `len` characters.
pub fn highlight_len(len: usize) -> usize {
    let n = match len {
        0 => 0,
        1 => 1,
        2 => 1,
        3 => 2,
        4..=5 => (len * 2 / 5).max(1),
        _ => (len / 2).max(2),
    };
    n.min(len)
}

/// Split `word` into emphasized prefix and remainder.
///
/// Never fails; lengths are counted in `char`s so multi-byte text is cut on
/// character boundaries.
pub fn split(word: &str) -> BionicSplit {
    let len = word.chars().count();
    let cut = highlight_len(len);
    let byte_index = word
        .char_indices()
        .nth(cut)
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    let (highlighted, rest) = word.split_at(byte_index);

    BionicSplit {
        highlighted: highlighted.to_string(),
        rest: rest.to_string(),
    }
}

/// Split every whitespace-delimited word of `text`.
pub fn bionic_words(text: &str) -> Vec<BionicWord> {
    text.split_whitespace().map(BionicWord::new).collect()
}
