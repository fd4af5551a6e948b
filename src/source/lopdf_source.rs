//! [`PageTextSource`] backed by lopdf.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Document as LopdfDocument, ObjectId};

use super::PageTextSource;
use crate::detect::{parse_header, read_header, PdfHeader};
use crate::error::{Error, Result};

/// A PDF loaded with lopdf.
pub struct LopdfSource {
    doc: LopdfDocument,
    pages: BTreeMap<u32, ObjectId>,
    header: PdfHeader,
}

impl LopdfSource {
    /// Load from a file path.
    ///
    /// The header is checked first so non-PDF files fail with
    /// [`Error::UnknownFormat`] instead of an opaque parser error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let header = read_header(path)?;
        let doc = LopdfDocument::load(path)?;
        Ok(Self::from_document(doc, header))
    }

    /// Load from an in-memory byte slice (e.g. an upload).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = parse_header(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc, header))
    }

    fn from_document(doc: LopdfDocument, header: PdfHeader) -> Self {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; extracted text may be empty or garbled");
        }
        let pages = doc.get_pages();
        Self { doc, pages, header }
    }

    /// PDF version from the file header.
    pub fn version(&self) -> &str {
        &self.header.version
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }
}

impl PageTextSource for LopdfSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Only a page whose content stream cannot be decoded is an error. When
    /// the content is readable but lopdf cannot map its glyphs to text (a
    /// missing font entry or ToUnicode map, say), the page yields `""`.
    fn page_text(&self, page_number: u32) -> Result<String> {
        let page_id = *self
            .pages
            .get(&page_number)
            .ok_or(Error::PageOutOfRange(page_number, self.page_count()))?;

        match self.doc.extract_text(&[page_number]) {
            Ok(text) => Ok(text),
            Err(extract_err) => {
                self.doc
                    .get_and_decode_page_content(page_id)
                    .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_number, e)))?;
                log::warn!(
                    "Page {}: text could not be decoded ({}); treating it as empty",
                    page_number,
                    extract_err
                );
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_non_pdf() {
        let result = LopdfSource::from_bytes(b"<html>not a pdf</html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_open_missing_file() {
        let result = LopdfSource::open("/definitely/not/here.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
