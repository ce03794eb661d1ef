//! Output of the PDF renderer.

use std::path::Path;

use crate::error::Result;

/// A complete, serialized PDF document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Conventional download name for exported drafts.
    pub const FILE_NAME: &'static str = "legal_draft.pdf";

    /// MIME type of the rendered bytes.
    pub const MIME_TYPE: &'static str = "application/pdf";

    /// Wrap serialized PDF bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Borrow the raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if nothing was serialized.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the document to a file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

impl AsRef<[u8]> for RenderedDocument {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
