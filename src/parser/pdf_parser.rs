//! PDF text extraction using lopdf.

use std::collections::btree_map;
use std::io::Read;
use std::path::Path;

use lopdf::{Document as LopdfDocument, ObjectId};

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{ExtractedText, Metadata, Page};

use super::options::{ErrorMode, ParseOptions};

/// Media box used when a page tree declares none (US Letter).
const DEFAULT_MEDIA_BOX: (f32, f32) = (612.0, 792.0);

/// Guards against cyclic `Parent` references when resolving inherited keys.
const MAX_TREE_DEPTH: usize = 32;

/// PDF document parser.
///
/// Holds the loaded document for a single extraction pass; pages are
/// decoded one at a time.
pub struct PdfParser {
    doc: LopdfDocument,
    options: ParseOptions,
    /// Whether the file carried an encryption dictionary when loaded
    encrypted: bool,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(Error::from)?;
        Self::with_document(doc, options)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(Error::from)?;
        Self::with_document(doc, options)
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Only documents that open with the empty user password are accepted.
    fn with_document(mut doc: LopdfDocument, options: ParseOptions) -> Result<Self> {
        let encrypted = doc.is_encrypted();
        if encrypted {
            if let Err(e) = doc.decrypt("") {
                log::warn!("Encrypted document requires a password: {}", e);
                return Err(Error::Encrypted);
            }
            log::debug!("Decrypted document with the empty user password");
        }
        Ok(Self {
            doc,
            options,
            encrypted,
        })
    }

    /// Extract the text of every page, joined by `\n` in page order.
    pub fn extract(&self) -> Result<ExtractedText> {
        let mut extracted = ExtractedText::new();

        for page in self.pages() {
            let page = page?;
            log::debug!(
                "Page {}: {} chars extracted",
                page.number(),
                page.text.chars().count()
            );
            extracted.push_page(&page.text);
        }

        Ok(extracted)
    }

    /// Iterate pages in index order, decoding one page per step.
    pub fn pages(&self) -> Pages<'_> {
        let ids = self.doc.get_pages();
        Pages {
            parser: self,
            ids: ids.into_iter(),
        }
    }

    /// Read document metadata from the trailer's Info dictionary.
    pub fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::with_version(self.doc.version.to_string());

        if let Ok(info) = self.doc.trailer.get(b"Info") {
            let info_dict = match info {
                lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
                lopdf::Object::Dictionary(d) => Some(d),
                _ => None,
            };

            if let Some(info_dict) = info_dict {
                metadata.title = get_string_from_dict(info_dict, b"Title");
                metadata.author = get_string_from_dict(info_dict, b"Author");
                metadata.subject = get_string_from_dict(info_dict, b"Subject");
                metadata.keywords = get_string_from_dict(info_dict, b"Keywords");
                metadata.creator = get_string_from_dict(info_dict, b"Creator");
                metadata.producer = get_string_from_dict(info_dict, b"Producer");

                if let Some(date_str) = get_string_from_dict(info_dict, b"CreationDate") {
                    metadata.created = parse_pdf_date(&date_str);
                }
                if let Some(date_str) = get_string_from_dict(info_dict, b"ModDate") {
                    metadata.modified = parse_pdf_date(&date_str);
                }
            }
        }

        metadata.page_count = self.page_count();
        metadata.encrypted = self.encrypted;
        metadata
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Check if the document was encrypted on disk.
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    fn parse_page(&self, page_num: u32, page_id: ObjectId) -> Result<Page> {
        let (width, height) = self.page_dimensions(page_id);
        let page = Page::new(page_num - 1, width, height);

        match self.extract_page_text(page_num) {
            Ok(text) => Ok(page.with_text(text)),
            Err(e) => match self.options.error_mode {
                ErrorMode::Strict => Err(e),
                ErrorMode::Lenient => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    Ok(page)
                }
            },
        }
    }

    /// Resolve the (possibly inherited) MediaBox of a page.
    fn page_dimensions(&self, page_id: ObjectId) -> (f32, f32) {
        let mut current = Some(page_id);

        for _ in 0..MAX_TREE_DEPTH {
            let Some(id) = current else { break };
            let Ok(dict) = self.doc.get_dictionary(id) else {
                break;
            };

            if let Ok(array) = dict.get(b"MediaBox").and_then(|m| m.as_array()) {
                if array.len() >= 4 {
                    let coord = |i: usize| array[i].as_float().unwrap_or(0.0);
                    return (coord(2) - coord(0), coord(3) - coord(1));
                }
            }

            current = dict.get(b"Parent").and_then(|p| p.as_reference()).ok();
        }

        DEFAULT_MEDIA_BOX
    }

    /// Text of one page as a single segment.
    ///
    /// lopdf rebuilds the page map on every call, so a full pass is
    /// quadratic in page count. At the 5 MB upload ceiling this stays well
    /// below the cost of decoding the content streams themselves.
    fn extract_page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map(|text| join_runs(&text))
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }
}

/// Join the text runs of a page with single spaces.
///
/// lopdf ends every text object with `\n`; a page must never contribute
/// more than one segment to the joined output.
fn join_runs(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|run| !run.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Iterator over a document's pages, in index order.
pub struct Pages<'a> {
    parser: &'a PdfParser,
    ids: btree_map::IntoIter<u32, ObjectId>,
}

impl Iterator for Pages<'_> {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        let (page_num, page_id) = self.ids.next()?;
        Some(self.parser.parse_page(page_num, page_id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        lopdf::Object::String(bytes, _) => {
            // UTF-16BE with BOM is the PDF text-string form for Unicode
            if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&utf16).ok()
            } else {
                String::from_utf8(bytes.clone())
                    .ok()
                    .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
            }
        }
        lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    })
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    if s.len() < 4 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6).and_then(|m| m.parse().ok()).unwrap_or(1);
    let day: u32 = s.get(6..8).and_then(|d| d.parse().ok()).unwrap_or(1);
    let hour: u32 = s.get(8..10).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minute: u32 = s.get(10..12).and_then(|m| m.parse().ok()).unwrap_or(0);
    let second: u32 = s.get(12..14).and_then(|s| s.parse().ok()).unwrap_or(0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}
