//! Error types for cvparse.
//!
//! Every variant of [`Error`] is fatal for the document being processed:
//! the run stops and no structure is produced. Recoverable conditions met
//! while interpreting a content stream are reported as
//! [`Warning`](crate::parser::Warning)s instead and never show up here.

use std::io;
use thiserror::Error;

/// Result type alias for cvparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version in the header is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing the PDF object structure or a content stream.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// A `Tf` operator named a font missing from the page's resources.
    #[error("Cannot resolve font '{name}' on page {page}")]
    FontNotFound {
        /// Font resource name as written in the content stream
        name: String,
        /// 1-indexed page number
        page: u32,
    },

    /// A text-showing operator ran before any font was selected.
    #[error("'{operator}' on page {page} shows text without an active font")]
    NoActiveFont {
        /// Operator that attempted to decode text
        operator: String,
        /// 1-indexed page number
        page: u32,
    },

    /// The token source produced an event that is neither operand nor keyword.
    #[error("Unexpected content token on page {page}: {description}")]
    UnexpectedToken {
        /// Description of the offending event
        description: String,
        /// 1-indexed page number
        page: u32,
    },

    /// An operator found an operand of the wrong type on top of the stack.
    #[error("'{operator}' on page {page} expects {expected} operand, found {found}")]
    OperandType {
        /// Operator being executed
        operator: String,
        /// Expected operand kind ("a name", "a string", "an array")
        expected: &'static str,
        /// Kind of the operand actually popped ("integer", "name", ..., or "nothing")
        found: &'static str,
        /// 1-indexed page number
        page: u32,
    },

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Invalid structure configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error while rendering the structure (text, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// An output sink rejected a write or seek.
    #[error("Output sink error: {0}")]
    Sink(String),
}

impl Error {
    /// Whether this error was raised by the content-stream interpreter,
    /// as opposed to I/O or document loading.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Error::FontNotFound { .. }
                | Error::NoActiveFont { .. }
                | Error::UnexpectedToken { .. }
                | Error::OperandType { .. }
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FontNotFound {
            name: "F9".to_string(),
            page: 2,
        };
        assert_eq!(err.to_string(), "Cannot resolve font 'F9' on page 2");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );
    }

    #[test]
    fn test_content_error_classification() {
        let err = Error::NoActiveFont {
            operator: "Tj".to_string(),
            page: 1,
        };
        assert!(err.is_content_error());
        assert!(!Error::Encrypted.is_content_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
