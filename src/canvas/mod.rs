//! Spatial page view: projection, drawing and hit-testing.
//!
//! Drawing and hit-testing both go through [`Projector`], so a block is hit
//! exactly where it was drawn.
//!
//! # Example
//!
//! ```
//! use astscope::canvas::{CanvasOptions, Point, SpatialRenderer, Viewport};
//! use astscope::model::{PageLayout, Section, TextFrameBlock};
//!
//! let mut section = Section::new(1).with_layout(PageLayout::new(10000, 10000));
//! section.add_block(TextFrameBlock::new("tf").at(0, 0, 5000, 5000));
//!
//! let renderer = SpatialRenderer::new(CanvasOptions::default());
//! let viewport = Viewport::new(120.0, 120.0);
//! let hit = renderer.hit(&section, 0, viewport, Point::new(20.0, 20.0));
//! assert_eq!(hit.unwrap().to_string(), "root.sections[0].blocks[0]");
//! ```

mod hit;
mod projector;
mod renderer;
mod scene;

pub use hit::hit_test;
pub use projector::Projector;
pub use renderer::{block_label, SpatialRenderer};
pub use scene::{DrawCommand, Scene};

use crate::model::BlockKind;
use crate::path::{Field, NodePath};
use std::fmt;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive containment: points on the edge are inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
        let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stroke colors for one block kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindColors {
    pub normal: Color,
    pub selected: Color,
}

/// Colors used by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub page_border: Color,
    pub page_fill: Color,
    pub margin: Color,
    pub text_frame: KindColors,
    pub table: KindColors,
    pub figure: KindColors,
}

impl Palette {
    /// Stroke colors for a block kind.
    pub fn for_kind(&self, kind: BlockKind) -> KindColors {
        match kind {
            BlockKind::TextFrame => self.text_frame,
            BlockKind::Table => self.table,
            BlockKind::Figure => self.figure,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xf8, 0xf8, 0xf8),
            page_border: Color::rgb(0x99, 0x99, 0x99),
            page_fill: Color::rgb(0xff, 0xff, 0xff),
            margin: Color::rgb(0xcc, 0xcc, 0xcc),
            text_frame: KindColors {
                normal: Color::rgb(0x93, 0xc5, 0xfd),
                selected: Color::rgb(0x25, 0x63, 0xeb),
            },
            table: KindColors {
                normal: Color::rgb(0xfb, 0xbf, 0x24),
                selected: Color::rgb(0xd9, 0x77, 0x06),
            },
            figure: KindColors {
                normal: Color::rgb(0x6e, 0xe7, 0xb7),
                selected: Color::rgb(0x05, 0x96, 0x69),
            },
        }
    }
}

/// Options for projecting and drawing a page.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasOptions {
    /// Pixels reserved around the page, split across both sides
    pub margin: f64,

    /// Pixel offset of the page's top-left corner
    pub offset: f64,

    /// Document units per unscaled pixel (the engine uses hundredths of a point)
    pub units_per_pixel: f64,

    /// Block label font size in pixels
    pub font_size: f64,

    /// Block label font family
    pub font_family: String,

    /// Dash pattern for the margin rectangle
    pub margin_dash: [f64; 2],

    /// Stroke width of unselected blocks
    pub line_width: f64,

    /// Stroke width of selected blocks
    pub selected_line_width: f64,

    /// Label position relative to the block's top-left corner
    pub label_offset: (f64, f64),

    /// Colors
    pub palette: Palette,
}

impl CanvasOptions {
    /// Create canvas options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the page offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set document units per pixel.
    pub fn with_units_per_pixel(mut self, units: f64) -> Self {
        self.units_per_pixel = units;
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            margin: 20.0,
            offset: 10.0,
            units_per_pixel: 100.0,
            font_size: 9.0,
            font_family: "sans-serif".to_string(),
            margin_dash: [3.0, 3.0],
            line_width: 1.0,
            selected_line_width: 2.0,
            label_offset: (2.0, 10.0),
            palette: Palette::default(),
        }
    }
}

/// Path of block `block_index` on section `section_index`.
pub fn block_path(section_index: usize, block_index: usize) -> NodePath {
    NodePath::root()
        .child(Field::Sections, section_index)
        .child(Field::Blocks, block_index)
}
