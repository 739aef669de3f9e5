//! Walking a snapshot along a path.

use super::{Field, NodePath};
use crate::model::{Block, Document, InlineItem, Node, NodeList};

/// Resolve a path string against a snapshot.
///
/// Returns `None` when the path is malformed, names a field the current node
/// does not have, or indexes past the end of a sequence. Never panics and has
/// no side effects, so it is safe to call on every redraw.
pub fn resolve<'a>(doc: &'a Document, path: &str) -> Option<Node<'a>> {
    let path = NodePath::parse(path).ok()?;
    resolve_path(doc, &path)
}

/// Resolve an already-parsed path against a snapshot.
pub fn resolve_path<'a>(doc: &'a Document, path: &NodePath) -> Option<Node<'a>> {
    let mut current = Node::Document(doc);
    for segment in path.segments() {
        let list = sequence(current, segment.field)?;
        current = match segment.index {
            Some(index) => list.get(index)?,
            None => Node::List(list),
        };
    }
    Some(current)
}

/// The child sequence `field` of `node`, if that node kind owns one.
pub(crate) fn sequence<'a>(node: Node<'a>, field: Field) -> Option<NodeList<'a>> {
    match (node, field) {
        (Node::Document(doc), Field::Sections) => Some(NodeList::Sections(&doc.sections)),
        (Node::Section(sec), Field::Blocks) => Some(NodeList::Blocks(&sec.blocks)),
        (Node::Block(Block::TextFrame(tf)), Field::Paragraphs) => {
            Some(NodeList::Paragraphs(&tf.paragraphs))
        }
        (Node::Block(Block::Table(table)), Field::Rows) => Some(NodeList::Rows(&table.rows)),
        (Node::Row(row), Field::Cells) => Some(NodeList::Cells(&row.cells)),
        (Node::Cell(cell), Field::Paragraphs) => Some(NodeList::Paragraphs(&cell.paragraphs)),
        (Node::Paragraph(para), Field::Items) => Some(NodeList::Items(&para.items)),
        (Node::Item(InlineItem::InlineObject(obj)), Field::Paragraphs) => {
            Some(NodeList::Paragraphs(&obj.paragraphs))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeKind, Paragraph, Section, Table, TableCell, TableRow, TextFrameBlock};

    fn sample() -> Document {
        let mut doc = Document::new();
        let mut section = Section::new(1);
        section.add_block(TextFrameBlock::new("tf").with_paragraph(Paragraph::with_text("hi")));
        section.add_block(
            Table::new("t", 1, 1).with_row(
                TableRow::new(0, 100)
                    .with_cell(TableCell::new(0, 0).with_paragraph(Paragraph::with_text("c"))),
            ),
        );
        doc.add_section(section);
        doc
    }

    #[test]
    fn test_resolve_root() {
        let doc = sample();
        let node = resolve(&doc, "root").unwrap();
        assert!(node.ptr_eq(&Node::Document(&doc)));
    }

    #[test]
    fn test_resolve_deep() {
        let doc = sample();
        let node = resolve(&doc, "root.sections[0].blocks[1].rows[0].cells[0].paragraphs[0].items[0]")
            .unwrap();
        assert_eq!(node.kind(), NodeKind::TextRun);
    }

    #[test]
    fn test_out_of_range_is_absent() {
        let doc = sample();
        assert!(resolve(&doc, "root.sections[99]").is_none());
        assert!(resolve(&doc, "root.sections[0].blocks[2]").is_none());
    }

    #[test]
    fn test_wrong_field_for_kind_is_absent() {
        let doc = sample();
        // a text frame has no rows, a table has no paragraphs
        assert!(resolve(&doc, "root.sections[0].blocks[0].rows[0]").is_none());
        assert!(resolve(&doc, "root.sections[0].blocks[1].paragraphs[0]").is_none());
        assert!(resolve(&doc, "root.blocks[0]").is_none());
    }

    #[test]
    fn test_malformed_is_absent() {
        let doc = sample();
        assert!(resolve(&doc, "").is_none());
        assert!(resolve(&doc, "root.sections[x]").is_none());
        assert!(resolve(&doc, "root.layout").is_none());
    }

    #[test]
    fn test_bare_field_resolves_to_list() {
        let doc = sample();
        match resolve(&doc, "root.sections[0].blocks") {
            Some(Node::List(list)) => assert_eq!(list.len(), 2),
            other => panic!("expected a list, got {:?}", other),
        }
        // nothing can be addressed through a bare list
        assert!(resolve(&doc, "root.sections.blocks[0]").is_none());
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(resolve(&doc, "root.sections[0]").is_none());
        assert!(resolve(&doc, "root").is_some());
    }
}
