//! PDF text extraction.

mod options;
mod pdf_parser;

pub use options::{ErrorMode, ParseOptions};
pub use pdf_parser::{Pages, PdfParser};
