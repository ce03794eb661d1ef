//! Document-level types.

use super::Page;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text extracted from a whole document.
///
/// `text` holds one segment per page joined by a single `\n`, in page order.
/// A page without text contributes an empty segment, so nothing is skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Joined page text
    pub text: String,

    /// Number of pages observed
    pub page_count: u32,
}

impl ExtractedText {
    /// Create an empty result (zero pages).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next page's text.
    pub fn push_page(&mut self, page_text: &str) {
        if self.page_count > 0 {
            self.text.push('\n');
        }
        self.text.push_str(page_text);
        self.page_count += 1;
    }

    /// Check whether no text was found at all.
    ///
    /// This is not an error: the caller decides how to react.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of characters in the extracted text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of whitespace-separated words in the extracted text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Serialize as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };

        result.map_err(|e| Error::Json(e.to_string()))
    }
}

impl FromIterator<Page> for ExtractedText {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        let mut extracted = ExtractedText::new();
        for page in iter {
            extracted.push_page(&page.text);
        }
        extracted
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,
}

impl Metadata {
    /// Create metadata with the given PDF version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            pdf_version: version.into(),
            ..Default::default()
        }
    }
}
