//! Text pipeline: cleanup, tokenization, and bionic splits.
//!
//! Everything here is pure and deterministic; the same input always yields
//! the same output.

mod bionic;
mod cleaner;
mod tokenizer;

pub use bionic::{bionic_words, highlight_len, split, BionicSplit, BionicWord};
pub use cleaner::TextCleaner;
pub use tokenizer::{is_abbreviation, Tokenizer, ABBREVIATIONS};
