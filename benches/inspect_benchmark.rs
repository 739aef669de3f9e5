//! Benchmarks for astscope inspection hot paths.
//!
//! Run with: cargo bench
//!
//! Tree rows, path resolution and page drawing run on every interaction, so
//! they are measured against synthetic snapshots of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use astscope::model::{PageLayout, Paragraph, Section, Table, TableCell, TableRow, TextFrameBlock};
use astscope::{
    parse_str, resolve, Document, DocumentStats, JsonFormat, SelectionState, SpatialRenderer,
    TreeView, Viewport,
};

/// Creates a snapshot with `page_count` pages of text frames and one table each.
fn create_test_document(page_count: usize) -> Document {
    let mut doc = Document::new();
    for p in 0..page_count {
        let mut section = Section::new(p as i32 + 1)
            .with_layout(PageLayout::new(59528, 84188).with_margins(2835, 2835, 2835, 2835));

        for b in 0..8 {
            let mut frame = TextFrameBlock::new(format!("u{}_{}", p, b)).at(
                2835,
                2835 + b * 9000,
                53858,
                8000,
            );
            for i in 0..6 {
                frame.add_paragraph(Paragraph::with_text(format!(
                    "Page {} frame {} paragraph {}: benchmark text for tree previews.",
                    p, b, i
                )));
            }
            section.add_block(frame);
        }

        let mut table = Table::new(format!("t{}", p), 4, 4).at(2835, 75000, 53858, 6000);
        for r in 0..4 {
            let mut row = TableRow::new(r, 1500);
            for c in 0..4 {
                row.add_cell(TableCell::new(r, c).with_paragraph(Paragraph::with_text("cell")));
            }
            table.add_row(row);
        }
        section.add_block(table);

        doc.add_section(section);
    }
    doc
}

/// Benchmark snapshot parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_parsing");

    for page_count in [1, 10, 50].iter() {
        let json = astscope::to_json(&create_test_document(*page_count), JsonFormat::Compact)
            .expect("serialize benchmark document");

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| parse_str(black_box(&json)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark path resolution.
fn bench_resolve(c: &mut Criterion) {
    let doc = create_test_document(50);

    c.bench_function("resolve_deep_path", |b| {
        b.iter(|| resolve(&doc, black_box("root.sections[42].blocks[8].rows[3].cells[2].paragraphs[0]")));
    });

    c.bench_function("resolve_missing_path", |b| {
        b.iter(|| resolve(&doc, black_box("root.sections[99].blocks[0]")));
    });
}

/// Benchmark tree row flattening.
fn bench_tree_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_rows");
    let doc = create_test_document(10);
    let selection = SelectionState::new();

    group.bench_function("collapsed", |b| {
        b.iter(|| TreeView::new(black_box(&doc)).rows(&selection));
    });

    group.bench_function("expand_all", |b| {
        b.iter(|| {
            TreeView::new(black_box(&doc))
                .with_expand_all(true)
                .rows(&selection)
        });
    });

    group.finish();
}

/// Benchmark page drawing and statistics.
fn bench_canvas(c: &mut Criterion) {
    let doc = create_test_document(10);
    let renderer = SpatialRenderer::default();
    let viewport = Viewport::new(800.0, 600.0);

    c.bench_function("draw_page", |b| {
        b.iter(|| renderer.draw(black_box(&doc.sections[3]), 3, None, viewport));
    });

    c.bench_function("draw_page_svg", |b| {
        b.iter(|| {
            renderer
                .draw(black_box(&doc.sections[3]), 3, None, viewport)
                .to_svg()
        });
    });

    c.bench_function("document_stats", |b| {
        b.iter(|| DocumentStats::collect(black_box(&doc)));
    });
}

criterion_group!(benches, bench_parsing, bench_resolve, bench_tree_rows, bench_canvas);
criterion_main!(benches);
