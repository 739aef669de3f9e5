//! JSON output for snapshots and individual nodes.

use crate::error::{Error, Result};
use crate::model::{Document, Node};
use serde::Serialize;

/// Layout of emitted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Two-space indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Serialize a whole snapshot in the engine's format.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    write(doc, format)
}

/// Serialize one node together with everything below it.
pub fn node_to_json(node: Node<'_>, format: JsonFormat) -> Result<String> {
    write(&node.to_value(), format)
}

fn write<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    }
    .map_err(|e| Error::Render(format!("cannot write snapshot JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Section, TextFrameBlock};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.source_format = Some("IDML".to_string());
        let mut section = Section::new(1);
        section.add_block(TextFrameBlock::new("u1").with_paragraph(Paragraph::with_text("Hello")));
        doc.add_section(section);
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"sourceFormat\""));
        assert!(json.contains("TEXT_FRAME_BLOCK"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact_round_trips() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_node_to_json() {
        let doc = sample();
        let block = &doc.sections[0].blocks[0];
        let json = node_to_json(Node::Block(block), JsonFormat::Compact).unwrap();
        assert!(json.starts_with(r#"{"blockType":"TEXT_FRAME_BLOCK","sourceId":"u1""#));
    }
}
