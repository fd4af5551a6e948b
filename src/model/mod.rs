//! Document model produced by the processing pipeline.
//!
//! These are plain values: built once, compared structurally, and
//! serialized in the shape reading clients expect.

mod document;
mod page;

pub use document::{file_name_of, reading_minutes, Document, DocumentStats, AVERAGE_READING_WPM};
pub use page::Page;
