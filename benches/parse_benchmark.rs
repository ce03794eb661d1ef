//! Benchmarks for extraction and export.
//!
//! Run with: cargo bench
//!
//! Fixtures are produced by the renderer itself, so every page is a real,
//! compressed single-font PDF page.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Rows that fit on one default A4 page.
const ROWS_PER_PAGE: usize = 26;

fn clause_text(lines: usize) -> String {
    (1..=lines)
        .map(|n| format!("{n}. The Recipient shall hold all Confidential Information in trust."))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Creates a PDF with the given number of full pages.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    paralegal::render(&clause_text(page_count * ROWS_PER_PAGE)).into_bytes()
}

/// Benchmark PDF format detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("detect_valid_pdf", |b| {
        b.iter(|| paralegal::detect_format_from_bytes(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("detect_non_pdf", |b| {
        b.iter(|| paralegal::detect_format_from_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark text extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for page_count in [1, 10, 50] {
        let data = create_test_pdf(page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| paralegal::extract_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark PDF export at various sizes.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    for lines in [100, 1000] {
        let text = clause_text(lines);

        group.bench_function(format!("{}_lines", lines), |b| {
            b.iter(|| paralegal::render(black_box(&text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_extraction,
    bench_rendering,
);
criterion_main!(benches);
