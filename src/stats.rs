//! Node counts for a snapshot.

use crate::model::{Block, Document, InlineItem, Paragraph, Section};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Counts of every structural node kind in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub section_count: usize,
    pub text_frame_count: usize,
    pub table_count: usize,
    pub figure_count: usize,
    pub row_count: usize,
    pub cell_count: usize,

    /// Paragraphs anywhere: text frames, cells and inline text frames
    pub paragraph_count: usize,

    pub text_run_count: usize,
    pub inline_object_count: usize,
    pub break_count: usize,

    /// Characters of text-run content
    pub char_count: usize,

    pub font_count: usize,
    pub paragraph_style_count: usize,
    pub character_style_count: usize,
}

impl DocumentStats {
    /// Count everything in `doc`; sections are counted in parallel.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = doc
            .sections
            .par_iter()
            .map(Self::for_section)
            .reduce(Self::default, |mut a, b| {
                a.merge(&b);
                a
            });

        stats.font_count = doc.fonts.len();
        stats.paragraph_style_count = doc.paragraph_styles.len();
        stats.character_style_count = doc.character_styles.len();
        stats
    }

    /// Counts for a single section.
    pub fn for_section(section: &Section) -> Self {
        let mut stats = Self {
            section_count: 1,
            ..Default::default()
        };
        for block in &section.blocks {
            match block {
                Block::TextFrame(tf) => {
                    stats.text_frame_count += 1;
                    tf.paragraphs.iter().for_each(|p| stats.count_paragraph(p));
                }
                Block::Table(table) => {
                    stats.table_count += 1;
                    stats.row_count += table.rows.len();
                    for cell in table.rows.iter().flat_map(|r| &r.cells) {
                        stats.cell_count += 1;
                        cell.paragraphs.iter().for_each(|p| stats.count_paragraph(p));
                    }
                }
                Block::Figure(_) => stats.figure_count += 1,
            }
        }
        stats
    }

    /// Total number of blocks.
    pub fn block_count(&self) -> usize {
        self.text_frame_count + self.table_count + self.figure_count
    }

    /// Total number of inline items.
    pub fn item_count(&self) -> usize {
        self.text_run_count + self.inline_object_count + self.break_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.section_count += other.section_count;
        self.text_frame_count += other.text_frame_count;
        self.table_count += other.table_count;
        self.figure_count += other.figure_count;
        self.row_count += other.row_count;
        self.cell_count += other.cell_count;
        self.paragraph_count += other.paragraph_count;
        self.text_run_count += other.text_run_count;
        self.inline_object_count += other.inline_object_count;
        self.break_count += other.break_count;
        self.char_count += other.char_count;
        self.font_count += other.font_count;
        self.paragraph_style_count += other.paragraph_style_count;
        self.character_style_count += other.character_style_count;
    }

    fn count_paragraph(&mut self, para: &Paragraph) {
        self.paragraph_count += 1;
        for item in &para.items {
            match item {
                InlineItem::TextRun(run) => {
                    self.text_run_count += 1;
                    self.char_count += run.text.chars().count();
                }
                InlineItem::InlineObject(obj) => {
                    self.inline_object_count += 1;
                    obj.paragraphs.iter().for_each(|p| self.count_paragraph(p));
                }
                InlineItem::Break(_) => self.break_count += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Break, BreakType, Figure, FigureKind, FontDef, InlineObject, ObjectKind, Table, TableCell,
        TableRow, TextFrameBlock, TextRun,
    };

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.fonts.push(FontDef::default());

        let mut first = Section::new(1);
        first.add_block(
            TextFrameBlock::new("tf").with_paragraph(
                Paragraph::new()
                    .with_item(TextRun::new("Héllo"))
                    .with_item(Break::new(BreakType::Line))
                    .with_item(
                        InlineObject::new(ObjectKind::InlineTextFrame, "itf")
                            .with_paragraph(Paragraph::with_text("in")),
                    ),
            ),
        );
        first.add_block(Figure::new("f", FigureKind::Image));

        let mut second = Section::new(2);
        second.add_block(
            Table::new("t", 1, 2).with_row(
                TableRow::new(0, 100)
                    .with_cell(TableCell::new(0, 0).with_paragraph(Paragraph::with_text("a")))
                    .with_cell(TableCell::new(0, 1)),
            ),
        );

        doc.add_section(first);
        doc.add_section(second);
        doc
    }

    #[test]
    fn test_collect() {
        let stats = DocumentStats::collect(&sample());
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.block_count(), 3);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.row_count, 1);
        assert_eq!(stats.cell_count, 2);
        // frame paragraph, inline frame paragraph, cell paragraph
        assert_eq!(stats.paragraph_count, 3);
        assert_eq!(stats.text_run_count, 3);
        assert_eq!(stats.item_count(), 5);
        assert_eq!(stats.char_count, 5 + 2 + 1);
        assert_eq!(stats.font_count, 1);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(DocumentStats::collect(&Document::new()), DocumentStats::default());
    }

    #[test]
    fn test_merge() {
        let mut a = DocumentStats {
            paragraph_count: 5,
            table_count: 2,
            ..Default::default()
        };
        let b = DocumentStats {
            paragraph_count: 3,
            figure_count: 4,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.paragraph_count, 8);
        assert_eq!(a.table_count, 2);
        assert_eq!(a.figure_count, 4);
    }
}
