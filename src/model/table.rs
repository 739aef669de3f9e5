//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
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

    /// Declared row count (may differ from `rows.len()` when rows are merged)
    #[serde(default)]
    pub row_count: i32,

    /// Declared column count
    #[serde(default)]
    pub col_count: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_table_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i64>,

    /// Column widths in engine units
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_widths: Vec<i64>,

    /// Rows in the table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table with the declared dimensions.
    pub fn new(source_id: impl Into<String>, row_count: i32, col_count: i32) -> Self {
        Self {
            source_id: Some(source_id.into()),
            row_count,
            col_count,
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

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Add a row and return self.
    pub fn with_row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Check if the table has complex structure (merged cells).
    pub fn has_merged_cells(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(|c| c.is_merged())
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub row_index: i32,
    #[serde(default)]
    pub row_height: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_grow: bool,

    /// Cells in the row
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new empty row.
    pub fn new(row_index: i32, row_height: i64) -> Self {
        Self {
            row_index,
            row_height,
            ..Default::default()
        }
    }

    /// Add a cell to the row.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Add a cell and return self.
    pub fn with_cell(mut self, cell: TableCell) -> Self {
        self.cells.push(cell);
        self
    }
}

fn one() -> i32 {
    1
}

fn is_one(v: &i32) -> bool {
    *v == 1
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default)]
    pub row_index: i32,
    #[serde(default)]
    pub column_index: i32,

    /// Number of rows this cell spans (the engine omits 1)
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub row_span: i32,

    /// Number of columns this cell spans (the engine omits 1)
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub column_span: i32,

    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_border: Option<CellBorder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_border: Option<CellBorder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_border: Option<CellBorder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_border: Option<CellBorder>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub top_left_diagonal_line: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub top_right_diagonal_line: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagonal_border: Option<CellBorder>,

    /// Cell content (paragraphs)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create an empty, unmerged cell.
    pub fn new(row_index: i32, column_index: i32) -> Self {
        Self {
            row_index,
            column_index,
            row_span: 1,
            column_span: 1,
            width: 0,
            height: 0,
            fill_color: None,
            vertical_align: None,
            margin_top: None,
            margin_bottom: None,
            margin_left: None,
            margin_right: None,
            top_border: None,
            bottom_border: None,
            left_border: None,
            right_border: None,
            top_left_diagonal_line: false,
            top_right_diagonal_line: false,
            diagonal_border: None,
            paragraphs: Vec::new(),
        }
    }

    /// Set row and column span and return self.
    pub fn span(mut self, row_span: i32, column_span: i32) -> Self {
        self.row_span = row_span;
        self.column_span = column_span;
        self
    }

    /// Add a paragraph to the cell.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a paragraph and return self.
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.column_span > 1
    }
}

/// One edge of a cell border.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellBorder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<f64>,
}
