//! Error types for the sezi library.

use std::io;
use thiserror::Error;

/// Result type alias for sezi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing a document for reading.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// The source document could not be opened, read, or parsed.
    ///
    /// Processing is aborted; no partial document is produced.
    #[error("Cannot read document '{path}': {reason}")]
    DocumentRead {
        /// Path as given by the caller
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// A display preference update was rejected.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap any failure that happened while opening `path` as a document read error.
    pub fn document_read(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::DocumentRead {
            path: path.into(),
            reason: cause.to_string(),
        }
    }

    /// Whether the error means the source document itself is missing,
    /// unreadable, or not a usable PDF.
    pub fn is_document_read(&self) -> bool {
        matches!(
            self,
            Error::DocumentRead { .. }
                | Error::Io(_)
                | Error::UnknownFormat
                | Error::UnsupportedVersion(_)
                | Error::PdfParse(_)
                | Error::Encrypted
        )
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
