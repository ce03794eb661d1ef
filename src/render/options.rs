//! Rendering options and configuration.
//!
//! Defaults: A4 pages, 10 mm side and top margins, a 20 mm bottom break
//! margin, 12 pt Helvetica on 10 mm rows.

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

/// Physical page size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// ISO A4 (210 x 297 mm)
    #[default]
    A4,
    /// US Letter (8.5 x 11 in)
    Letter,
    /// Arbitrary size in points
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0 * MM, 297.0 * MM),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Options for rendering text to PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Page size for every page
    pub page_size: PageSize,

    /// Left, right and top margin in points
    pub margin: f32,

    /// Distance from the bottom edge that triggers a page break, in points
    pub bottom_margin: f32,

    /// Font size in points
    pub font_size: f32,

    /// Height of one row in points
    pub line_height: f32,

    /// Document title written to the Info dictionary
    pub title: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the left, right and top margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the bottom break margin.
    pub fn with_bottom_margin(mut self, margin: f32) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the row height.
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Width available to a row of text.
    pub fn text_width(&self) -> f32 {
        self.page_size.dimensions().0 - 2.0 * self.margin
    }

    /// Height between the top margin and the page-break trigger.
    pub fn text_height(&self) -> f32 {
        self.page_size.dimensions().1 - self.margin - self.bottom_margin
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 10.0 * MM,
            bottom_margin: 20.0 * MM,
            font_size: 12.0,
            line_height: 10.0 * MM,
            title: None,
        }
    }
}
