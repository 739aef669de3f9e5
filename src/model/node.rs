//! Borrowed, uniformly typed handle to any node of a snapshot.

use super::{Block, Document, InlineItem, Paragraph, Section, TableCell, TableRow};
use serde_json::Value;

/// A reference to one node of a [`Document`], tagged by structural role.
///
/// Every role has its own variant, including `Cell`, so consumers dispatch
/// with an exhaustive `match` instead of inspecting which fields are present.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Document(&'a Document),
    Section(&'a Section),
    Block(&'a Block),
    Row(&'a TableRow),
    Cell(&'a TableCell),
    Paragraph(&'a Paragraph),
    Item(&'a InlineItem),
    /// A whole child sequence, addressed by a bare field name
    List(NodeList<'a>),
}

/// A child sequence of some node.
#[derive(Debug, Clone, Copy)]
pub enum NodeList<'a> {
    Sections(&'a [Section]),
    Blocks(&'a [Block]),
    Rows(&'a [TableRow]),
    Cells(&'a [TableCell]),
    Paragraphs(&'a [Paragraph]),
    Items(&'a [InlineItem]),
}

/// Fine-grained node kind, with block and item variants spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Section,
    TextFrame,
    Table,
    Figure,
    Row,
    Cell,
    Paragraph,
    TextRun,
    InlineObject,
    Break,
    List,
}

impl<'a> Node<'a> {
    /// Get the node's kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::Section(_) => NodeKind::Section,
            Node::Block(Block::TextFrame(_)) => NodeKind::TextFrame,
            Node::Block(Block::Table(_)) => NodeKind::Table,
            Node::Block(Block::Figure(_)) => NodeKind::Figure,
            Node::Row(_) => NodeKind::Row,
            Node::Cell(_) => NodeKind::Cell,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Item(InlineItem::TextRun(_)) => NodeKind::TextRun,
            Node::Item(InlineItem::InlineObject(_)) => NodeKind::InlineObject,
            Node::Item(InlineItem::Break(_)) => NodeKind::Break,
            Node::List(_) => NodeKind::List,
        }
    }

    /// Serialize the node to its JSON form, as the engine would write it.
    pub fn to_value(&self) -> Value {
        let result = match self {
            Node::Document(doc) => serde_json::to_value(doc),
            Node::Section(sec) => serde_json::to_value(sec),
            Node::Block(block) => serde_json::to_value(block),
            Node::Row(row) => serde_json::to_value(row),
            Node::Cell(cell) => serde_json::to_value(cell),
            Node::Paragraph(para) => serde_json::to_value(para),
            Node::Item(item) => serde_json::to_value(item),
            Node::List(list) => list.to_value(),
        };
        result.unwrap_or_default()
    }

    /// Check whether both handles point at the same node of the same snapshot.
    pub fn ptr_eq(&self, other: &Node<'_>) -> bool {
        match (self, other) {
            (Node::Document(a), Node::Document(b)) => std::ptr::eq(*a, *b),
            (Node::Section(a), Node::Section(b)) => std::ptr::eq(*a, *b),
            (Node::Block(a), Node::Block(b)) => std::ptr::eq(*a, *b),
            (Node::Row(a), Node::Row(b)) => std::ptr::eq(*a, *b),
            (Node::Cell(a), Node::Cell(b)) => std::ptr::eq(*a, *b),
            (Node::Paragraph(a), Node::Paragraph(b)) => std::ptr::eq(*a, *b),
            (Node::Item(a), Node::Item(b)) => std::ptr::eq(*a, *b),
            (Node::List(a), Node::List(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl<'a> NodeList<'a> {
    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        match self {
            NodeList::Sections(s) => s.len(),
            NodeList::Blocks(s) => s.len(),
            NodeList::Rows(s) => s.len(),
            NodeList::Cells(s) => s.len(),
            NodeList::Paragraphs(s) => s.len(),
            NodeList::Items(s) => s.len(),
        }
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked element lookup.
    pub fn get(&self, index: usize) -> Option<Node<'a>> {
        match *self {
            NodeList::Sections(s) => s.get(index).map(Node::Section),
            NodeList::Blocks(s) => s.get(index).map(Node::Block),
            NodeList::Rows(s) => s.get(index).map(Node::Row),
            NodeList::Cells(s) => s.get(index).map(Node::Cell),
            NodeList::Paragraphs(s) => s.get(index).map(Node::Paragraph),
            NodeList::Items(s) => s.get(index).map(Node::Item),
        }
    }

    fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            NodeList::Sections(s) => serde_json::to_value(s),
            NodeList::Blocks(s) => serde_json::to_value(s),
            NodeList::Rows(s) => serde_json::to_value(s),
            NodeList::Cells(s) => serde_json::to_value(s),
            NodeList::Paragraphs(s) => serde_json::to_value(s),
            NodeList::Items(s) => serde_json::to_value(s),
        }
    }

    fn ptr_eq(&self, other: &NodeList<'_>) -> bool {
        match (self, other) {
            (NodeList::Sections(a), NodeList::Sections(b)) => std::ptr::eq(*a, *b),
            (NodeList::Blocks(a), NodeList::Blocks(b)) => std::ptr::eq(*a, *b),
            (NodeList::Rows(a), NodeList::Rows(b)) => std::ptr::eq(*a, *b),
            (NodeList::Cells(a), NodeList::Cells(b)) => std::ptr::eq(*a, *b),
            (NodeList::Paragraphs(a), NodeList::Paragraphs(b)) => std::ptr::eq(*a, *b),
            (NodeList::Items(a), NodeList::Items(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Table, TextFrameBlock, TextRun};

    #[test]
    fn test_node_kind() {
        let block = Block::Table(Table::new("t", 1, 1));
        assert_eq!(Node::Block(&block).kind(), NodeKind::Table);

        let item = InlineItem::TextRun(TextRun::new("x"));
        assert_eq!(Node::Item(&item).kind(), NodeKind::TextRun);
    }

    #[test]
    fn test_ptr_eq_is_identity_not_equality() {
        let a = Paragraph::with_text("same");
        let b = Paragraph::with_text("same");
        assert_eq!(a, b);
        assert!(Node::Paragraph(&a).ptr_eq(&Node::Paragraph(&a)));
        assert!(!Node::Paragraph(&a).ptr_eq(&Node::Paragraph(&b)));
    }

    #[test]
    fn test_list_get_is_bounds_checked() {
        let blocks = vec![Block::TextFrame(TextFrameBlock::new("a"))];
        let list = NodeList::Blocks(&blocks);
        assert_eq!(list.len(), 1);
        assert!(list.get(0).is_some());
        assert!(list.get(1).is_none());
    }

    #[test]
    fn test_to_value_includes_tag() {
        let block = Block::TextFrame(TextFrameBlock::new("tf"));
        let value = Node::Block(&block).to_value();
        assert_eq!(value["blockType"], "TEXT_FRAME_BLOCK");
        assert_eq!(value["sourceId"], "tf");
    }
}
