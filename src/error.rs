//! Error types for the paralegal library.
//!
//! [`Error`] is fatal for the call that returned it. [`RenderError`] is
//! scoped to a single line of a PDF export and never escapes the renderer:
//! the render loop replaces the failed line with a fixed fallback line.

use std::io;
use thiserror::Error;

/// Result type alias for paralegal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting, generating or exporting.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ── Extraction errors ─────────────────────────────────────────────────
    /// The input is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a malformed version.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure (xref, trailer, objects).
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be opened.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    // ── Serialization errors ──────────────────────────────────────────────
    /// Error serializing extracted content to JSON.
    #[error("JSON serialization error: {0}")]
    Json(String),

    // ── Assistant errors ──────────────────────────────────────────────────
    /// Uploaded document exceeds the accepted size.
    #[error("File size {size} bytes exceeds the {limit} byte upload limit")]
    UploadTooLarge { size: usize, limit: usize },

    /// Neither a query nor document text was supplied.
    #[error("Please enter some text or upload a file first")]
    EmptyInput,

    /// The completion service failed (network, quota, malformed response).
    #[error("Generation failed: {0}")]
    Generation(String),

    /// A PDF export was requested but the last response is not a draft.
    #[error("No drafted document is available for export")]
    NoDraft,
}

impl Error {
    /// Whether this error means the input could not be read as a PDF.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownFormat
                | Error::UnsupportedVersion(_)
                | Error::PdfParse(_)
                | Error::Encrypted
                | Error::TextExtract(_)
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

/// A non-fatal failure while laying out one line of an export.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Margins leave no room for text on the page.
    #[error("line {line}: no usable text area ({width:.2}pt x {height:.2}pt)")]
    NoTextArea { line: usize, width: f32, height: f32 },

    /// A single glyph does not fit within the text width.
    #[error("line {line}: glyph {glyph:?} is wider than the {width:.2}pt text width")]
    GlyphTooWide { line: usize, glyph: char, width: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::Json("key must be a string".into());
        assert_eq!(
            err.to_string(),
            "JSON serialization error: key must be a string"
        );
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(Error::UnknownFormat.is_parse_error());
        assert!(Error::PdfParse("xref".into()).is_parse_error());
        assert!(Error::TextExtract("Page 2".into()).is_parse_error());
        assert!(Error::Encrypted.is_parse_error());
        assert!(!Error::EmptyInput.is_parse_error());
        assert!(!Error::Generation("quota".into()).is_parse_error());
    }

    #[test]
    fn test_upload_too_large_display() {
        let err = Error::UploadTooLarge {
            size: 6_000_000,
            limit: 5_242_880,
        };
        let msg = err.to_string();
        assert!(msg.contains("6000000"), "got: {msg}");
        assert!(msg.contains("5242880"), "got: {msg}");
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::GlyphTooWide {
            line: 3,
            glyph: 'W',
            width: 4.0,
        };
        assert!(err.to_string().starts_with("line 3"));
    }
}
