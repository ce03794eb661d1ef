//! PDF serialization for laid-out pages.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, StringFormat, Stream};

use super::encoding::encode_line;
use super::layout::PageLayout;
use super::options::RenderOptions;

/// Resource name of the single font.
const FONT_NAME: &str = "F1";

/// Serialize pages to PDF bytes.
///
/// This does not fail. A page whose content stream cannot be encoded is
/// written blank, and a serialization failure returns whatever was written.
pub fn write_pdf(pages: &[PageLayout], options: &RenderOptions) -> Vec<u8> {
    let (width, height) = options.page_size.dimensions();

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { FONT_NAME => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        let content = page_content(page, options.font_size);
        let data = content.encode().unwrap_or_else(|e| {
            log::warn!("Page {}: content stream encoding failed: {}", index + 1, e);
            Vec::new()
        });

        let content_id = doc.add_object(Stream::new(dictionary! {}, data));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.0_f32.into(), 0.0_f32.into(), width.into(), height.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info = dictionary! {
        "Producer" => Object::string_literal(format!("paralegal {}", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
    };
    if let Some(title) = &options.title {
        info.set(
            "Title",
            Object::String(encode_line(title).into_bytes(), StringFormat::Literal),
        );
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut buffer = Vec::new();
    if let Err(e) = doc.save_to(&mut buffer) {
        log::error!("PDF serialization failed after {} bytes: {}", buffer.len(), e);
    }
    buffer
}

/// One text object per non-blank row.
fn page_content(page: &PageLayout, font_size: f32) -> Content {
    let mut operations = Vec::new();
    for row in page.text_rows() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![FONT_NAME.into(), font_size.into()],
        ));
        operations.push(Operation::new("Td", vec![row.x.into(), row.baseline.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(row.bytes.clone(), StringFormat::Hexadecimal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::Row;

    fn page(rows: &[&[u8]]) -> PageLayout {
        PageLayout {
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, bytes)| Row {
                    x: 28.0,
                    baseline: 800.0 - 28.0 * i as f32,
                    bytes: bytes.to_vec(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_blank_rows_not_emitted() {
        let content = page_content(&page(&[b"one", b"", b"three"]), 12.0);
        let shows = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .count();
        assert_eq!(shows, 2);
    }

    #[test]
    fn test_writes_loadable_pdf() {
        let options = RenderOptions::new().with_title("Draft \u{2013} NDA");
        let bytes = write_pdf(&[page(&[b"Clause 1"]), page(&[b""])], &options);

        assert!(bytes.starts_with(b"%PDF-1.4"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
