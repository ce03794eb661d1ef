//! # paralegal
//!
//! Building blocks for an AI legal assistant.
//!
//! The library extracts plain text from uploaded PDF documents, turns user
//! input into task-specific prompts for a hosted language model, and exports
//! drafted documents back to PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paralegal::{extract_file, render};
//!
//! fn main() -> paralegal::Result<()> {
//!     // Extract the text of a contract
//!     let contract = extract_file("lease.pdf")?;
//!     println!("{} pages", contract.page_count);
//!
//!     // Export text as a PDF; this never fails
//!     let pdf = render("MUTUAL NON-DISCLOSURE AGREEMENT\n\n1. Definitions");
//!     pdf.write_to("legal_draft.pdf")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Components
//!
//! - **Extraction** ([`parser`]): per-page text joined in page order
//! - **Rendering** ([`render`]): Unicode text to a paginated single-byte PDF
//! - **Tasks** ([`task`]): the five legal task templates
//! - **Assistant** ([`assistant`]): upload policy, input composition and
//!   generation against any [`CompletionService`]

pub mod assistant;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;
pub mod task;

// Re-export commonly used types
pub use assistant::{
    accept_upload, accept_upload_with_options, compose_input, export_draft, preview, Assistant,
    CompletionService, DISCLAIMER, MAX_UPLOAD_BYTES, PREVIEW_CHARS,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, RenderError, Result};
pub use model::{ExtractedText, Metadata, Page, RenderedDocument};
pub use parser::{ErrorMode, ParseOptions, PdfParser};
pub use render::{render, render_with_options, PageSize, RenderOptions, FALLBACK_LINE};
pub use session::{Response, Session};
pub use task::{LegalTask, TaskTemplate};

use std::io::Read;
use std::path::Path;

/// Extract the text of a PDF held in memory.
///
/// # Example
///
/// ```no_run
/// use paralegal::extract_bytes;
///
/// let data = std::fs::read("contract.pdf").unwrap();
/// let extracted = extract_bytes(&data).unwrap();
/// println!("{}", extracted.text);
/// ```
pub fn extract_bytes(data: &[u8]) -> Result<ExtractedText> {
    PdfParser::from_bytes(data)?.extract()
}

/// Extract the text of a PDF held in memory with custom options.
pub fn extract_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<ExtractedText> {
    PdfParser::from_bytes_with_options(data, options)?.extract()
}

/// Extract the text of a PDF file.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractedText> {
    PdfParser::open(path)?.extract()
}

/// Extract the text of a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use paralegal::{extract_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let extracted = extract_file_with_options("scanned.pdf", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ExtractedText> {
    PdfParser::open_with_options(path, options)?.extract()
}

/// Extract the text of a PDF read from `reader`.
pub fn extract_reader<R: Read>(reader: R) -> Result<ExtractedText> {
    PdfParser::from_reader(reader)?.extract()
}

/// Read metadata from a PDF file.
pub fn metadata<P: AsRef<Path>>(path: P) -> Result<Metadata> {
    Ok(PdfParser::open(path)?.metadata())
}
