//! Text to PDF export.
//!
//! Rendering never fails. Smart punctuation is flattened, each input line is
//! encoded to single-byte glyphs, wrapped and paginated. A line that cannot
//! be laid out is replaced by [`FALLBACK_LINE`] and the export continues.

mod encoding;
mod layout;
mod metrics;
mod normalize;
mod options;
mod writer;

pub use encoding::{decode, encode_line, is_target_byte, EncodedLine, REPLACEMENT_GLYPH};
pub use layout::{Flow, PageLayout, Row};
pub use metrics::{glyph_width, text_width};
pub use normalize::{normalize_punctuation, SMART_PUNCTUATION};
pub use options::{PageSize, RenderOptions, MM};

use crate::model::RenderedDocument;

/// Row written in place of a line that could not be laid out.
pub const FALLBACK_LINE: &str = "Error encoding line.";

/// Render text to a PDF with default options.
pub fn render(text: &str) -> RenderedDocument {
    render_with_options(text, &RenderOptions::default())
}

/// Render text to a PDF.
///
/// Lines are split on `\n`; a trailing `\r` on a line is dropped.
pub fn render_with_options(text: &str, options: &RenderOptions) -> RenderedDocument {
    let normalized = normalize_punctuation(text);
    let mut flow = Flow::new(options);
    let mut lines = 0;
    let mut fallbacks = 0;
    let mut substituted = 0;

    for (index, raw) in normalized.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let encoded = encode_line(raw);
        substituted += encoded.substituted();
        lines += 1;

        let rows = match flow.wrap(index + 1, &encoded) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("{}; writing fallback line", e);
                fallbacks += 1;
                vec![FALLBACK_LINE.as_bytes().to_vec()]
            }
        };

        for row in rows {
            flow.place(row);
        }
    }

    if substituted > 0 {
        log::warn!(
            "{} characters have no single-byte glyph and were replaced with '?'",
            substituted
        );
    }

    let pages = flow.into_pages();
    let bytes = writer::write_pdf(&pages, options);

    log::debug!(
        "Rendered {} lines onto {} pages ({} bytes, {} substituted glyphs, {} fallback lines)",
        lines,
        pages.len(),
        bytes.len(),
        substituted,
        fallbacks
    );

    RenderedDocument::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PdfParser;

    fn extract(doc: &RenderedDocument) -> (String, u32) {
        let extracted = PdfParser::from_bytes(doc.bytes()).unwrap().extract().unwrap();
        (extracted.text, extracted.page_count)
    }

    #[test]
    fn test_render_simple() {
        let doc = render("MUTUAL NON-DISCLOSURE AGREEMENT\n\n1. Definitions");
        assert!(doc.bytes().starts_with(b"%PDF-"));

        let (text, pages) = extract(&doc);
        assert_eq!(pages, 1);
        assert!(text.contains("MUTUAL NON-DISCLOSURE AGREEMENT"));
        assert!(text.contains("1. Definitions"));
    }

    #[test]
    fn test_render_empty_text() {
        let doc = render("");
        let (text, pages) = extract(&doc);
        assert_eq!(pages, 1);
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_smart_punctuation_flattened() {
        let doc = render("Hello \u{2014} \u{2018}world\u{2019}");
        let (text, _) = extract(&doc);
        assert!(text.contains("Hello - 'world'"), "got: {text:?}");
    }

    #[test]
    fn test_unencodable_substituted() {
        let doc = render("Signed \u{1F600} here");
        let (text, _) = extract(&doc);
        assert!(text.contains("Signed ? here"), "got: {text:?}");
    }

    #[test]
    fn test_paginates_at_row_capacity() {
        let text = (1..=27).map(|n| format!("Line {n}")).collect::<Vec<_>>().join("\n");
        let (extracted, pages) = extract(&render(&text));
        assert_eq!(pages, 2);
        assert!(extracted.contains("Line 1"));
        assert!(extracted.contains("Line 27"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let (text, _) = extract(&render("Recital A\r\nRecital B\r\n"));
        assert!(text.contains("Recital A"));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_glyph_too_wide_falls_back() {
        let options = RenderOptions::new()
            .with_page_size(PageSize::Custom { width: 25.0, height: 400.0 })
            .with_margin(10.0)
            .with_bottom_margin(10.0)
            .with_line_height(14.0);

        let doc = render_with_options("W\ni", &options);
        let (text, _) = extract(&doc);
        assert_eq!(text, format!("{FALLBACK_LINE} i"));
    }

    #[test]
    fn test_no_text_area_still_renders() {
        let options = RenderOptions::default().with_margin(400.0);
        let doc = render_with_options("one\ntwo", &options);
        assert!(!doc.is_empty());

        let (text, _) = extract(&doc);
        assert_eq!(text.matches(FALLBACK_LINE).count(), 2);
    }
}
