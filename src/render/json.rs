//! JSON rendering.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Document, DocumentStats};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A document together with its statistics, as returned after processing.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport<'a> {
    pub document: &'a Document,
    pub stats: DocumentStats,
}

impl<'a> DocumentReport<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            stats: document.stats(),
        }
    }
}

/// Serialize any value to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize a document and its statistics as `{"document": .., "stats": ..}`.
pub fn report_to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    to_json(&DocumentReport::new(doc), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;

    fn sample() -> Document {
        let page = Page::new(
            1,
            "Hello there.".to_string(),
            vec!["Hello".into(), "there.".into()],
            vec!["Hello there".into()],
        );
        Document::new("/books/hello.pdf", vec![page])
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"file_name\": \"hello.pdf\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_document_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&sample(), JsonFormat::Compact).unwrap()).unwrap();
        assert_eq!(value["file_path"], "/books/hello.pdf");
        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["pages"][0]["word_count"], 2);
        assert_eq!(value["pages"][0]["sentences"][0], "Hello there");
    }

    #[test]
    fn test_report_to_json() {
        let value: serde_json::Value =
            serde_json::from_str(&report_to_json(&sample(), JsonFormat::Compact).unwrap())
                .unwrap();
        assert_eq!(value["stats"]["total_words"], 2);
        assert_eq!(value["stats"]["estimated_reading_time_minutes"], 0.0);
        assert_eq!(value["document"]["file_name"], "hello.pdf");
    }

    #[test]
    fn test_document_json_round_trip() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
