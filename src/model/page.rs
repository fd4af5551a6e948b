//! Page-level types.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::text::{TextCleaner, Tokenizer};

/// One page of a processed document.
///
/// `words` and `sentences` are derived from `text` alone and never reach
/// across page boundaries. Word and sentence counts are computed on demand
/// but included when the page is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    page_number: u32,
    text: String,
    words: Vec<String>,
    sentences: Vec<String>,
}

impl Page {
    /// Assemble a page from already tokenized parts.
    pub fn new(page_number: u32, text: String, words: Vec<String>, sentences: Vec<String>) -> Self {
        Self {
            page_number,
            text,
            words,
            sentences,
        }
    }

    /// Clean raw extracted text and tokenize it.
    pub fn from_raw(
        page_number: u32,
        raw: &str,
        cleaner: &TextCleaner,
        tokenizer: &Tokenizer,
    ) -> Self {
        let text = cleaner.clean(raw);
        let words = tokenizer.words(&text);
        let sentences = tokenizer.sentences(&text);
        Self::new(page_number, text, words, sentences)
    }

    /// Page number (1-indexed, source order)
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Cleaned page text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Words in reading order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Sentences in reading order.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Length of the cleaned text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the page produced no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Page", 6)?;
        state.serialize_field("page_number", &self.page_number)?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("words", &self.words)?;
        state.serialize_field("sentences", &self.sentences)?;
        state.serialize_field("word_count", &self.word_count())?;
        state.serialize_field("sentence_count", &self.sentence_count())?;
        state.end()
    }
}
