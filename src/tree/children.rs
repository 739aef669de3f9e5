//! Per-kind child enumeration with display metadata.

use crate::model::{Block, Document, InlineItem, Node, NodeList, Paragraph};
use crate::path::{sequence, Field, NodePath};

/// Display characters kept in a paragraph preview.
pub const PARAGRAPH_PREVIEW_CHARS: usize = 40;

/// Display characters kept in a text run label.
pub const TEXT_RUN_LABEL_CHARS: usize = 30;

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

/// One child of a node, as shown in the tree.
///
/// `label`, `icon` and `summary` are presentation only; identity is `path`.
#[derive(Debug, Clone)]
pub struct ChildEntry<'a> {
    pub node: Node<'a>,
    pub path: NodePath,
    pub label: String,
    pub icon: &'static str,
    pub summary: Option<String>,
}

/// The entry for the document itself, shown as the tree's root row.
pub fn root_entry(doc: &Document) -> ChildEntry<'_> {
    ChildEntry {
        node: Node::Document(doc),
        path: NodePath::root(),
        label: "Document".to_string(),
        icon: "📄",
        summary: Some(format!("{} sections", doc.section_count())),
    }
}

/// Enumerate the children of `node`, which lives at `path`.
///
/// Each emitted path resolves back to exactly the emitted child. Leaf kinds
/// and bare lists yield an empty vector.
pub fn children<'a>(node: Node<'a>, path: &NodePath) -> Vec<ChildEntry<'a>> {
    let Some(field) = child_field(node) else {
        return Vec::new();
    };
    let Some(list) = sequence(node, field) else {
        return Vec::new();
    };

    match list {
        NodeList::Sections(sections) => sections
            .iter()
            .enumerate()
            .map(|(i, sec)| ChildEntry {
                node: Node::Section(sec),
                path: path.child(field, i),
                label: format!("Page {}", sec.display_number(i)),
                icon: "📃",
                summary: Some(format!("{} blocks", sec.block_count())),
            })
            .collect(),
        NodeList::Blocks(blocks) => blocks
            .iter()
            .enumerate()
            .map(|(i, block)| block_entry(block, path.child(field, i)))
            .collect(),
        NodeList::Paragraphs(paragraphs) => paragraphs
            .iter()
            .enumerate()
            .map(|(i, para)| ChildEntry {
                node: Node::Paragraph(para),
                path: path.child(field, i),
                label: format!("¶ {}", i),
                icon: "¶",
                summary: non_empty(paragraph_preview(para)),
            })
            .collect(),
        NodeList::Rows(rows) => rows
            .iter()
            .enumerate()
            .map(|(i, row)| ChildEntry {
                node: Node::Row(row),
                path: path.child(field, i),
                label: format!("Row {}", row.row_index),
                icon: "─",
                summary: Some(format!("h={}", row.row_height)),
            })
            .collect(),
        NodeList::Cells(cells) => cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ChildEntry {
                node: Node::Cell(cell),
                path: path.child(field, i),
                label: format!("Cell({},{})", cell.row_index, cell.column_index),
                icon: "□",
                summary: cell
                    .is_merged()
                    .then(|| format!("span {}×{}", cell.row_span, cell.column_span)),
            })
            .collect(),
        NodeList::Items(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| item_entry(item, path.child(field, i)))
            .collect(),
    }
}

/// Check whether `node` has at least one child.
pub fn has_children(node: Node<'_>) -> bool {
    child_field(node)
        .and_then(|field| sequence(node, field))
        .map_or(false, |list| !list.is_empty())
}

/// The structural field a node's children live in.
fn child_field(node: Node<'_>) -> Option<Field> {
    match node {
        Node::Document(_) => Some(Field::Sections),
        Node::Section(_) => Some(Field::Blocks),
        Node::Block(Block::TextFrame(_)) => Some(Field::Paragraphs),
        Node::Block(Block::Table(_)) => Some(Field::Rows),
        Node::Block(Block::Figure(_)) => None,
        Node::Row(_) => Some(Field::Cells),
        Node::Cell(_) => Some(Field::Paragraphs),
        Node::Paragraph(_) => Some(Field::Items),
        Node::Item(InlineItem::InlineObject(_)) => Some(Field::Paragraphs),
        Node::Item(InlineItem::TextRun(_)) | Node::Item(InlineItem::Break(_)) => None,
        Node::List(_) => None,
    }
}

fn block_entry<'a>(block: &'a Block, path: NodePath) -> ChildEntry<'a> {
    let source_id = block.source_id().unwrap_or_default();
    let (label, icon, summary) = match block {
        Block::TextFrame(tf) => (
            "TextFrame".to_string(),
            "T",
            format!("{} {}¶", source_id, tf.paragraphs.len()),
        ),
        Block::Table(t) => (
            "Table".to_string(),
            "#",
            format!("{}×{}", t.row_count, t.col_count),
        ),
        Block::Figure(f) => (
            format!("Figure {}", f.kind.map(|k| k.as_str()).unwrap_or_default())
                .trim_end()
                .to_string(),
            "🖼",
            source_id.to_string(),
        ),
    };
    ChildEntry {
        node: Node::Block(block),
        path,
        label,
        icon,
        summary: non_empty(summary.trim_start().to_string()),
    }
}

fn item_entry<'a>(item: &'a InlineItem, path: NodePath) -> ChildEntry<'a> {
    let (label, icon, summary) = match item {
        InlineItem::TextRun(run) => {
            let family = run.font_family.as_deref().unwrap_or_default();
            let size = match run.font_size {
                Some(size) if size != 0 => format!("{}pt", format_number(f64::from(size) / 100.0)),
                _ => String::new(),
            };
            (
                format!("\"{}\"", truncate_chars(&run.text, TEXT_RUN_LABEL_CHARS)),
                "—",
                non_empty(format!("{} {}", family, size).trim().to_string()),
            )
        }
        InlineItem::InlineObject(obj) => (
            obj.kind.map(|k| k.as_str()).unwrap_or("INLINE").to_string(),
            "◆",
            obj.source_id.clone().and_then(non_empty),
        ),
        InlineItem::Break(brk) => (
            brk.break_type.map(|t| t.as_str()).unwrap_or("BREAK").to_string(),
            "↵",
            None,
        ),
    };
    ChildEntry {
        node: Node::Item(item),
        path,
        label,
        icon,
        summary,
    }
}

/// Concatenated text-run content of a paragraph, truncated for display.
pub fn paragraph_preview(para: &Paragraph) -> String {
    truncate_chars(&para.plain_text(), PARAGRAPH_PREVIEW_CHARS)
}

/// Keep the first `max` characters of `text`, appending `…` when anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

/// Render a number without a trailing `.0` for whole values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
