//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page as seen by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page index (0-based, document order)
    pub index: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Embedded text in reading order; empty for image-only pages
    pub text: String,
}

impl Page {
    /// Create a new page with the given dimensions and no text.
    pub fn new(index: u32, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            text: String::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(index: u32) -> Self {
        Self::new(index, 612.0, 792.0)
    }

    /// Set the page text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// 1-indexed page number, as PDF viewers show it.
    pub fn number(&self) -> u32 {
        self.index + 1
    }

    /// Check if the page carries no text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_creation() {
        let page = Page::letter(0).with_text("Clause 1");
        assert_eq!(page.number(), 1);
        assert_eq!(page.dimensions(), (612.0, 792.0));
        assert!(!page.is_landscape());
        assert!(!page.is_blank());
    }

    #[test]
    fn test_blank_page() {
        let page = Page::new(4, 842.0, 595.0).with_text("  \n");
        assert!(page.is_blank());
        assert!(page.is_landscape());
    }
}
