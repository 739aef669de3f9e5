//! Document model types for the AST snapshot.
//!
//! This module defines the immutable tree the conversion engine exports:
//! sections (pages) own blocks, blocks own paragraphs or table rows, rows own
//! cells, and paragraphs own inline items. Field names follow the engine's
//! camelCase JSON exactly; sequences and nullable fields the engine omits
//! deserialize to empty / `None`.

mod document;
mod node;
mod page;
mod paragraph;
mod table;

pub use document::{Document, FontDef, PageBackground, StyleDef};
pub use node::{Node, NodeKind, NodeList};
pub use page::{Block, BlockKind, Bounds, Figure, FigureKind, PageLayout, Section, TextFrameBlock};
pub use paragraph::{Break, BreakType, InlineItem, InlineObject, ItemKind, ObjectKind, Paragraph, TextRun};
pub use table::{CellBorder, Table, TableCell, TableRow};
