//! Page-level types: sections, page layout and blocks.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A single page of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Page number as reported by the engine (0 when unknown)
    #[serde(default)]
    pub page_number: i32,

    /// Page geometry; sections without it cannot be drawn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PageLayout>,

    /// Content blocks in drawing order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a new section with the given page number.
    pub fn new(page_number: i32) -> Self {
        Self {
            page_number,
            layout: None,
            blocks: Vec::new(),
        }
    }

    /// Set the page layout and return self.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Add a block to the section.
    pub fn add_block(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Display number: the engine's page number, or the 1-based position when it is unset.
    pub fn display_number(&self, index: usize) -> String {
        if self.page_number != 0 {
            self.page_number.to_string()
        } else {
            (index + 1).to_string()
        }
    }
}

/// Page size and margins, in engine units (hundredths of a point).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageLayout {
    pub page_width: i64,
    pub page_height: i64,
    pub margin_top: i64,
    pub margin_bottom: i64,
    pub margin_left: i64,
    pub margin_right: i64,
    pub column_count: i32,
    pub column_gutter: i64,
}

impl PageLayout {
    /// Create a layout with the given page size and no margins.
    pub fn new(page_width: i64, page_height: i64) -> Self {
        Self {
            page_width,
            page_height,
            column_count: 1,
            ..Default::default()
        }
    }

    /// Set the four margins and return self.
    pub fn with_margins(mut self, top: i64, bottom: i64, left: i64, right: i64) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Width of the area inside the margins.
    pub fn content_width(&self) -> i64 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Height of the area inside the margins.
    pub fn content_height(&self) -> i64 {
        self.page_height - self.margin_top - self.margin_bottom
    }
}

/// Position and size of a block on its page, in engine units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// A content block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType")]
pub enum Block {
    /// A text frame holding paragraphs
    #[serde(rename = "TEXT_FRAME_BLOCK")]
    TextFrame(TextFrameBlock),

    /// A table
    #[serde(rename = "TABLE")]
    Table(Table),

    /// An image or a pre-rendered shape
    #[serde(rename = "FIGURE")]
    Figure(Figure),
}

/// Discriminant of [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    TextFrame,
    Table,
    Figure,
}

impl BlockKind {
    /// The engine's tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::TextFrame => "TEXT_FRAME_BLOCK",
            BlockKind::Table => "TABLE",
            BlockKind::Figure => "FIGURE",
        }
    }
}

impl Block {
    /// Get the block's kind tag.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::TextFrame(_) => BlockKind::TextFrame,
            Block::Table(_) => BlockKind::Table,
            Block::Figure(_) => BlockKind::Figure,
        }
    }

    /// Identifier of the source object the block was converted from.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Block::TextFrame(tf) => tf.source_id.as_deref(),
            Block::Table(t) => t.source_id.as_deref(),
            Block::Figure(f) => f.source_id.as_deref(),
        }
    }

    /// Position and size on the page.
    pub fn bounds(&self) -> Bounds {
        match self {
            Block::TextFrame(tf) => Bounds {
                x: tf.x,
                y: tf.y,
                width: tf.width,
                height: tf.height,
            },
            Block::Table(t) => Bounds {
                x: t.x,
                y: t.y,
                width: t.width,
                height: t.height,
            },
            Block::Figure(f) => Bounds {
                x: f.x,
                y: f.y,
                width: f.width,
                height: f.height,
            },
        }
    }

    /// Check if this block is a text frame.
    pub fn is_text_frame(&self) -> bool {
        matches!(self, Block::TextFrame(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a figure.
    pub fn is_figure(&self) -> bool {
        matches!(self, Block::Figure(_))
    }
}

impl From<TextFrameBlock> for Block {
    fn from(tf: TextFrameBlock) -> Self {
        Block::TextFrame(tf)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(t)
    }
}

impl From<Figure> for Block {
    fn from(f: Figure) -> Self {
        Block::Figure(f)
    }
}

/// A text frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrameBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub z_order: i32,
    #[serde(default)]
    pub column_count: i32,
    #[serde(default)]
    pub column_gutter: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub vertical_text: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_justification: Option<String>,
    #[serde(default)]
    pub inset_top: i64,
    #[serde(default)]
    pub inset_left: i64,
    #[serde(default)]
    pub inset_bottom: i64,
    #[serde(default)]
    pub inset_right: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_tint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_tint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub from_group: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrameBlock {
    /// Create an empty text frame.
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: Some(source_id.into()),
            column_count: 1,
            ..Default::default()
        }
    }

    /// Set position and size and return self.
    pub fn at(mut self, x: i64, y: i64, width: i64, height: i64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Add a paragraph to the frame.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a paragraph and return self.
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }
}

/// A figure: placed image or pre-rendered vector content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FigureKind>,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub z_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_height: Option<i32>,
    #[serde(default)]
    pub has_image_data: bool,
}

impl Figure {
    /// Create a figure of the given kind.
    pub fn new(source_id: impl Into<String>, kind: FigureKind) -> Self {
        Self {
            source_id: Some(source_id.into()),
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Set position and size and return self.
    pub fn at(mut self, x: i64, y: i64, width: i64, height: i64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }
}

/// What a figure holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigureKind {
    Image,
    RenderedShape,
    RenderedGroup,
    #[serde(other)]
    Unknown,
}

impl FigureKind {
    /// The engine's tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FigureKind::Image => "IMAGE",
            FigureKind::RenderedShape => "RENDERED_SHAPE",
            FigureKind::RenderedGroup => "RENDERED_GROUP",
            FigureKind::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new() {
        let section = Section::new(3);
        assert_eq!(section.page_number, 3);
        assert_eq!(section.block_count(), 0);
        assert!(section.layout.is_none());
    }

    #[test]
    fn test_display_number_falls_back_to_position() {
        assert_eq!(Section::new(7).display_number(0), "7");
        assert_eq!(Section::new(0).display_number(4), "5");
    }

    #[test]
    fn test_layout_content_area() {
        let layout = PageLayout::new(59528, 84188).with_margins(1000, 2000, 3000, 4000);
        assert_eq!(layout.content_width(), 59528 - 7000);
        assert_eq!(layout.content_height(), 84188 - 3000);
    }

    #[test]
    fn test_block_tag_roundtrip() {
        let json = r#"{"blockType":"FIGURE","sourceId":"u1","kind":"RENDERED_SHAPE","x":10,"y":20,"width":30,"height":40}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind(), BlockKind::Figure);
        assert_eq!(block.source_id(), Some("u1"));
        assert_eq!(
            block.bounds(),
            Bounds {
                x: 10,
                y: 20,
                width: 30,
                height: 40
            }
        );

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["blockType"], "FIGURE");
        assert_eq!(value["kind"], "RENDERED_SHAPE");
    }

    #[test]
    fn test_unknown_figure_kind() {
        let figure: Figure = serde_json::from_str(r#"{"kind":"HOLOGRAM"}"#).unwrap();
        assert_eq!(figure.kind, Some(FigureKind::Unknown));
    }

    #[test]
    fn test_block_variants() {
        let block: Block = TextFrameBlock::new("tf1").into();
        assert!(block.is_text_frame());
        assert!(!block.is_table());
        assert!(!block.is_figure());
        assert_eq!(block.kind().as_str(), "TEXT_FRAME_BLOCK");
    }
}
