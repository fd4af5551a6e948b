//! PDF header detection.
//!
//! Runs before the full object parse so that obviously wrong inputs (HTML
//! error pages saved as `.pdf`, empty uploads) fail fast with a clear error.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header information found at the start of a PDF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
    /// Byte offset of `%PDF-` (non-zero when the file has leading junk)
    pub offset: usize,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3;

/// Readers accept the header anywhere in the first kilobyte.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Read and validate the header of the file at `path`.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<PdfHeader> {
    let file = File::open(path)?;
    let mut window = Vec::with_capacity(HEADER_SEARCH_WINDOW);
    file.take(HEADER_SEARCH_WINDOW as u64)
        .read_to_end(&mut window)?;
    parse_header(&window)
}

/// Validate a PDF header from the leading bytes of a file.
pub fn parse_header(data: &[u8]) -> Result<PdfHeader> {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    let offset = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let start = offset + PDF_MAGIC.len();
    let version_bytes = data
        .get(start..start + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfHeader { version, offset })
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == VERSION_LEN
        && matches!(bytes[0], b'1' | b'2')
        && bytes[1] == b'.'
        && bytes[2].is_ascii_digit()
}

/// Check if bytes start like a PDF file.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    parse_header(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_valid() {
        let header = parse_header(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap();
        assert_eq!(header.version, "1.7");
        assert_eq!(header.offset, 0);
        assert_eq!(header.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_parse_header_with_leading_junk() {
        let header = parse_header(b"\x00\x00garbage%PDF-2.0\n").unwrap();
        assert_eq!(header.version, "2.0");
        assert_eq!(header.offset, 9);
    }

    #[test]
    fn test_parse_header_rejects_html() {
        let result = parse_header(b"<!DOCTYPE html><html></html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_header_truncated() {
        assert!(matches!(parse_header(b"%PDF-1"), Err(Error::UnknownFormat)));
        assert!(matches!(parse_header(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_header_bad_version() {
        let result = parse_header(b"%PDF-x.y\n");
        assert!(matches!(result, Err(Error::UnsupportedVersion(v)) if v == "x.y"));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }
}
