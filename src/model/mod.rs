//! Data model shared by the extractor, renderer and assistant.
//!
//! Every value here is created once, consumed, and dropped; nothing is
//! shared mutably between calls.

mod document;
mod page;
mod rendered;

pub use document::{ExtractedText, Metadata};
pub use page::Page;
pub use rendered::RenderedDocument;
