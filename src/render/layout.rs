//! Line wrapping and pagination.
//!
//! Rows are laid out top to bottom the way a word processor fills a page:
//! a line is broken at the last space that fits, or between glyphs when a
//! single word is wider than the text area. A new page starts when the next
//! row would cross the bottom break margin.

use super::encoding::EncodedLine;
use super::metrics::{glyph_width, text_width};
use super::options::RenderOptions;
use crate::error::RenderError;

/// Tolerance for width and height comparisons, in points.
const EPS: f32 = 1e-3;

/// One positioned row of glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Left edge in points
    pub x: f32,
    /// Baseline in PDF user space (origin bottom-left)
    pub baseline: f32,
    /// Encoded glyphs; empty for a blank row
    pub bytes: Vec<u8>,
}

/// Rows placed on a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub rows: Vec<Row>,
}

impl PageLayout {
    /// Rows that carry glyphs.
    pub fn text_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.bytes.is_empty())
    }
}

/// Cursor that places rows onto successive pages.
#[derive(Debug)]
pub struct Flow<'a> {
    options: &'a RenderOptions,
    page_height: f32,
    cursor: f32,
    pages: Vec<PageLayout>,
}

impl<'a> Flow<'a> {
    /// Start a flow with one empty page.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            page_height: options.page_size.dimensions().1,
            cursor: options.margin,
            pages: vec![PageLayout::default()],
        }
    }

    /// Split an encoded line into rows that fit the text width.
    ///
    /// An empty line yields a single empty row. Fails when the page leaves
    /// no room for text or a single glyph is wider than the text area.
    pub fn wrap(&self, line: usize, encoded: &EncodedLine) -> Result<Vec<Vec<u8>>, RenderError> {
        let width = self.options.text_width();
        let height = self.options.text_height();
        let font_size = self.options.font_size;

        if !(width > 0.0)
            || !(font_size > 0.0)
            || !(self.options.line_height > 0.0)
            || height + EPS < self.options.line_height
        {
            return Err(RenderError::NoTextArea { line, width, height });
        }

        let bytes = encoded.as_bytes();
        if bytes.is_empty() {
            return Ok(vec![Vec::new()]);
        }

        let mut rows = Vec::new();
        let mut start = 0;
        let mut last_space = None;
        let mut row_width = 0.0_f32;
        let mut i = 0;

        while i < bytes.len() {
            let byte = bytes[i];
            let advance = f32::from(glyph_width(byte)) * font_size / 1000.0;

            if row_width + advance > width + EPS {
                if byte == b' ' {
                    rows.push(bytes[start..i].to_vec());
                    start = i + 1;
                    i += 1;
                    last_space = None;
                    row_width = 0.0;
                    continue;
                }

                if let Some(space) = last_space.take() {
                    rows.push(bytes[start..space].to_vec());
                    start = space + 1;
                    row_width = text_width(&bytes[start..i], font_size);
                    continue;
                }

                if i == start {
                    return Err(RenderError::GlyphTooWide {
                        line,
                        glyph: byte as char,
                        width: advance,
                    });
                }

                rows.push(bytes[start..i].to_vec());
                start = i;
                row_width = 0.0;
                continue;
            }

            if byte == b' ' {
                last_space = Some(i);
            }
            row_width += advance;
            i += 1;
        }

        if start < bytes.len() || rows.is_empty() {
            rows.push(bytes[start..].to_vec());
        }

        Ok(rows)
    }

    /// Place one row, breaking to a new page first if it would not fit.
    pub fn place(&mut self, bytes: Vec<u8>) {
        let line_height = self.options.line_height;
        let trigger = self.page_height - self.options.bottom_margin;

        let current_has_rows = self.pages.last().is_some_and(|page| !page.rows.is_empty());
        if self.cursor + line_height > trigger + EPS && current_has_rows {
            self.pages.push(PageLayout::default());
            self.cursor = self.options.margin;
        }

        let baseline =
            self.page_height - (self.cursor + 0.5 * line_height + 0.3 * self.options.font_size);
        let row = Row {
            x: self.options.margin,
            baseline,
            bytes,
        };

        if let Some(page) = self.pages.last_mut() {
            page.rows.push(row);
        }
        self.cursor += line_height;
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Finish the flow and return the laid-out pages.
    pub fn into_pages(self) -> Vec<PageLayout> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::encoding::encode_line;
    use crate::render::options::PageSize;

    fn narrow(width: f32) -> RenderOptions {
        RenderOptions::new()
            .with_page_size(PageSize::Custom { width: width + 20.0, height: 400.0 })
            .with_margin(10.0)
            .with_bottom_margin(10.0)
            .with_font_size(10.0)
            .with_line_height(12.0)
    }

    #[test]
    fn test_empty_line_single_row() {
        let options = RenderOptions::default();
        let flow = Flow::new(&options);
        let rows = flow.wrap(1, &encode_line("")).unwrap();
        assert_eq!(rows, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_short_line_unchanged() {
        let options = RenderOptions::default();
        let flow = Flow::new(&options);
        let rows = flow.wrap(1, &encode_line("This Agreement is made")).unwrap();
        assert_eq!(rows, vec![b"This Agreement is made".to_vec()]);
    }

    #[test]
    fn test_breaks_at_last_space() {
        // "aaaa" at 10pt is 22.24pt, a space 2.78pt; 50pt fits two words
        let options = narrow(50.0);
        let flow = Flow::new(&options);
        let rows = flow.wrap(1, &encode_line("aaaa aaaa aaaa aaaa")).unwrap();
        assert_eq!(rows, vec![b"aaaa aaaa".to_vec(), b"aaaa aaaa".to_vec()]);
    }

    #[test]
    fn test_breaks_long_word_between_glyphs() {
        // 5.56pt per 'a', 30pt holds five
        let options = narrow(30.0);
        let flow = Flow::new(&options);
        let rows = flow.wrap(1, &encode_line("aaaaaaaaaaaa")).unwrap();
        assert_eq!(
            rows,
            vec![b"aaaaa".to_vec(), b"aaaaa".to_vec(), b"aa".to_vec()]
        );
        let total: usize = rows.iter().map(Vec::len).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_glyph_too_wide() {
        let options = narrow(5.0);
        let flow = Flow::new(&options);
        let err = flow.wrap(7, &encode_line("W")).unwrap_err();
        assert!(matches!(err, RenderError::GlyphTooWide { line: 7, glyph: 'W', .. }));
    }

    #[test]
    fn test_no_text_area() {
        let options = RenderOptions::default().with_margin(400.0);
        let flow = Flow::new(&options);
        let err = flow.wrap(3, &encode_line("text")).unwrap_err();
        assert!(matches!(err, RenderError::NoTextArea { line: 3, .. }));
    }

    #[test]
    fn test_pagination_default_a4() {
        let options = RenderOptions::default();
        let mut flow = Flow::new(&options);
        for _ in 0..26 {
            flow.place(b"row".to_vec());
        }
        assert_eq!(flow.page_count(), 1);

        flow.place(b"row".to_vec());
        assert_eq!(flow.page_count(), 2);

        let pages = flow.into_pages();
        assert_eq!(pages[0].rows.len(), 26);
        assert_eq!(pages[1].rows.len(), 1);
    }

    #[test]
    fn test_baselines_descend() {
        let options = RenderOptions::default();
        let mut flow = Flow::new(&options);
        flow.place(b"first".to_vec());
        flow.place(Vec::new());
        flow.place(b"third".to_vec());

        let pages = flow.into_pages();
        let rows = &pages[0].rows;
        assert!(rows[0].baseline > rows[1].baseline);
        assert!(rows[1].baseline > rows[2].baseline);
        assert_eq!(pages[0].text_rows().count(), 2);
    }
}
