//! One-level attribute listing for a resolved node.

use crate::model::Node;
use crate::path::Field;
use serde_json::Value;

/// How a value should be styled when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTone {
    /// Null or missing
    Null,
    /// A boolean (the payload picks the color)
    Boolean(bool),
    Number,
    String,
    /// An array, summarized by length
    Array,
    /// An object, summarized by its first keys
    Object,
}

impl ValueTone {
    /// Check whether the value is summarized or absent rather than shown.
    pub fn is_muted(&self) -> bool {
        matches!(self, ValueTone::Null | ValueTone::Array | ValueTone::Object)
    }
}

/// One key/value row of the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub key: String,
    pub value: String,
    pub tone: ValueTone,
}

/// Lists a node's attributes, one level deep.
///
/// Child-sequence fields are hidden: children are reached through paths, not
/// through the inspector.
#[derive(Debug, Clone)]
pub struct DetailInspector {
    show_structural: bool,
    object_keys: usize,
}

impl Default for DetailInspector {
    fn default() -> Self {
        Self {
            show_structural: false,
            object_keys: 3,
        }
    }
}

impl DetailInspector {
    /// Create an inspector with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also list child-sequence fields (summarized like any array).
    pub fn with_structural_fields(mut self, show: bool) -> Self {
        self.show_structural = show;
        self
    }

    /// Rows for `node` in attribute order.
    pub fn rows(&self, node: Node<'_>) -> Vec<DetailRow> {
        self.rows_for_value(&node.to_value())
    }

    /// Rows for an already-serialized node.
    pub fn rows_for_value(&self, value: &Value) -> Vec<DetailRow> {
        let entries: Vec<(String, &Value)> = match value {
            Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            other => vec![("value".to_string(), other)],
        };

        entries
            .into_iter()
            .filter(|(key, _)| self.show_structural || !is_structural(key))
            .map(|(key, v)| {
                let (value, tone) = self.format_value(v);
                DetailRow { key, value, tone }
            })
            .collect()
    }

    /// Format one value without descending into it.
    pub fn format_value(&self, value: &Value) -> (String, ValueTone) {
        match value {
            Value::Null => ("null".to_string(), ValueTone::Null),
            Value::Bool(b) => (b.to_string(), ValueTone::Boolean(*b)),
            Value::Number(n) => (n.to_string(), ValueTone::Number),
            Value::String(s) => (format!("\"{}\"", s), ValueTone::String),
            Value::Array(items) if items.is_empty() => ("[]".to_string(), ValueTone::Array),
            Value::Array(items) => (format!("[{} items]", items.len()), ValueTone::Array),
            Value::Object(map) => {
                let keys: Vec<&str> = map.keys().take(self.object_keys).map(String::as_str).collect();
                let more = if map.len() > self.object_keys { "…" } else { "" };
                (format!("{{{}{}}}", keys.join(", "), more), ValueTone::Object)
            }
        }
    }
}

/// Check if `key` names a child-sequence field.
pub fn is_structural(key: &str) -> bool {
    Field::from_name(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Table, TableCell, TableRow, TextRun};
    use crate::model::{Block, InlineItem};
    use serde_json::json;

    #[test]
    fn test_format_rules() {
        let inspector = DetailInspector::new();
        assert_eq!(inspector.format_value(&json!(null)), ("null".into(), ValueTone::Null));
        assert_eq!(
            inspector.format_value(&json!(true)),
            ("true".into(), ValueTone::Boolean(true))
        );
        assert_eq!(inspector.format_value(&json!(1050)), ("1050".into(), ValueTone::Number));
        assert_eq!(inspector.format_value(&json!(0.5)), ("0.5".into(), ValueTone::Number));
        assert_eq!(
            inspector.format_value(&json!("Noto")),
            ("\"Noto\"".into(), ValueTone::String)
        );
        assert_eq!(inspector.format_value(&json!([])), ("[]".into(), ValueTone::Array));
        assert_eq!(
            inspector.format_value(&json!([1, 2, 3])),
            ("[3 items]".into(), ValueTone::Array)
        );
        assert_eq!(
            inspector.format_value(&json!({"a": 1, "b": 2})),
            ("{a, b}".into(), ValueTone::Object)
        );
        assert_eq!(
            inspector.format_value(&json!({"a": 1, "b": 2, "c": 3, "d": 4})),
            ("{a, b, c…}".into(), ValueTone::Object)
        );
        assert_eq!(inspector.format_value(&json!({})), ("{}".into(), ValueTone::Object));
    }

    #[test]
    fn test_structural_fields_hidden() {
        let cell = TableCell::new(1, 2).span(2, 1).with_paragraph(Paragraph::with_text("x"));
        let rows = DetailInspector::new().rows(Node::Cell(&cell));
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert!(keys.contains(&"rowIndex"));
        assert!(keys.contains(&"rowSpan"));
        assert!(!keys.contains(&"paragraphs"));

        let all = DetailInspector::new()
            .with_structural_fields(true)
            .rows(Node::Cell(&cell));
        let paragraphs = all.iter().find(|r| r.key == "paragraphs").unwrap();
        assert_eq!(paragraphs.value, "[1 items]");
    }

    #[test]
    fn test_rows_keep_attribute_order() {
        let block = Block::Table(
            Table::new("t9", 2, 3).with_row(TableRow::new(0, 100).with_cell(TableCell::new(0, 0))),
        );
        let rows = DetailInspector::new().rows(Node::Block(&block));
        assert_eq!(rows[0].key, "blockType");
        assert_eq!(rows[0].value, "\"TABLE\"");
        assert_eq!(rows[1].key, "sourceId");
        assert!(rows.iter().all(|r| r.key != "rows"));
    }

    #[test]
    fn test_text_run_rows() {
        let item = InlineItem::TextRun(TextRun::new("Hi").with_font("Noto Sans", 1000));
        let rows = DetailInspector::new().rows(Node::Item(&item));
        let find = |k: &str| rows.iter().find(|r| r.key == k).map(|r| r.value.clone());
        assert_eq!(find("text").as_deref(), Some("\"Hi\""));
        assert_eq!(find("fontSizeHwpunits").as_deref(), Some("1000"));
        assert!(ValueTone::Array.is_muted());
        assert!(!ValueTone::Number.is_muted());
    }
}
