//! Path addressing for snapshot nodes.
//!
//! A path is `root` followed by zero or more `.field` or `.field[index]`
//! segments, where `field` is one of the structural sequence names
//! (`sections`, `blocks`, `paragraphs`, `rows`, `cells`, `items`):
//!
//! ```
//! use astscope::path::{Field, NodePath};
//!
//! let path: NodePath = "root.sections[0].blocks[2]".parse().unwrap();
//! assert_eq!(path.depth(), 2);
//! assert_eq!(path.to_string(), "root.sections[0].blocks[2]");
//! assert_eq!(NodePath::root().child(Field::Sections, 0).to_string(), "root.sections[0]");
//! ```

mod resolve;

pub use resolve::{resolve, resolve_path};
pub(crate) use resolve::sequence;

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// The token every path starts with.
pub const ROOT: &str = "root";

/// Errors produced when a string does not follow the path grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The string does not start with `root`.
    #[error("path must start with `root`: {0:?}")]
    MissingRoot(String),

    /// Two dots in a row, or a trailing dot.
    #[error("empty segment in {0:?}")]
    EmptySegment(String),

    /// The segment is not `name` or `name[index]`.
    #[error("malformed segment {0:?}")]
    BadSegment(String),

    /// The segment names something other than a structural sequence.
    #[error("unknown field {0:?}")]
    UnknownField(String),

    /// The index does not fit in `usize`.
    #[error("index out of range in {0:?}")]
    IndexOverflow(String),
}

/// Structural field names that hold child sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Sections,
    Blocks,
    Paragraphs,
    Rows,
    Cells,
    Items,
}

impl Field {
    /// Every structural field, in the order the detail view hides them.
    pub const ALL: [Field; 6] = [
        Field::Paragraphs,
        Field::Items,
        Field::Blocks,
        Field::Rows,
        Field::Cells,
        Field::Sections,
    ];

    /// The field's name as it appears in paths and in the snapshot JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Sections => "sections",
            Field::Blocks => "blocks",
            Field::Paragraphs => "paragraphs",
            Field::Rows => "rows",
            Field::Cells => "cells",
            Field::Items => "items",
        }
    }

    /// Look up a field by name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `.field` or `.field[index]` step of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    pub field: Field,
    pub index: Option<usize>,
}

impl Segment {
    /// An indexed step, `field[index]`.
    pub fn indexed(field: Field, index: usize) -> Self {
        Self {
            field,
            index: Some(index),
        }
    }

    /// A bare step addressing the whole sequence.
    pub fn bare(field: Field) -> Self {
        Self { field, index: None }
    }

    fn parse(raw: &str) -> Result<Self, PathError> {
        static SEGMENT: OnceLock<Regex> = OnceLock::new();
        let re = SEGMENT.get_or_init(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?:\[(\d+)\])?$").unwrap());

        let caps = re
            .captures(raw)
            .ok_or_else(|| PathError::BadSegment(raw.to_string()))?;
        let field = Field::from_name(&caps[1]).ok_or_else(|| PathError::UnknownField(caps[1].to_string()))?;
        let index = match caps.get(2) {
            Some(m) => Some(
                m.as_str()
                    .parse::<usize>()
                    .map_err(|_| PathError::IndexOverflow(raw.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { field, index })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.field, i),
            None => write!(f, "{}", self.field),
        }
    }
}

/// A parsed path.
///
/// Equality, hashing and ordering are by segments, so two paths are equal
/// exactly when their canonical strings are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    /// The path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path string.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let rest = s
            .strip_prefix(ROOT)
            .ok_or_else(|| PathError::MissingRoot(s.to_string()))?;
        if rest.is_empty() {
            return Ok(Self::root());
        }
        let rest = rest
            .strip_prefix('.')
            .ok_or_else(|| PathError::MissingRoot(s.to_string()))?;

        let segments = rest
            .split('.')
            .map(|raw| {
                if raw.is_empty() {
                    Err(PathError::EmptySegment(s.to_string()))
                } else {
                    Segment::parse(raw)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Build a path from segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The path's segments, root excluded.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments below the root (0 for the root itself).
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path of the `index`-th element of `field` under this node.
    pub fn child(&self, field: Field, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::indexed(field, index));
        Self { segments }
    }

    /// Path of the whole `field` sequence under this node.
    pub fn field(&self, field: Field) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::bare(field));
        Self { segments }
    }

    /// Path of the parent node, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// All proper ancestors, root first.
    pub fn ancestors(&self) -> Vec<NodePath> {
        (0..self.segments.len())
            .map(|n| Self {
                segments: self.segments[..n].to_vec(),
            })
            .collect()
    }

    /// Segment-wise prefix test: `blocks[1]` is not a prefix of `blocks[10]`.
    pub fn starts_with(&self, prefix: &NodePath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Index of the section this path descends into, if any.
    pub fn section_index(&self) -> Option<usize> {
        match self.segments.first() {
            Some(Segment {
                field: Field::Sections,
                index,
            }) => *index,
            _ => None,
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT)?;
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let path = NodePath::parse("root").unwrap();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "root");
    }

    #[test]
    fn test_parse_indexed_and_bare() {
        let path = NodePath::parse("root.sections[1].blocks").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::indexed(Field::Sections, 1),
                Segment::bare(Field::Blocks)
            ]
        );
        assert_eq!(path.to_string(), "root.sections[1].blocks");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            NodePath::parse("sections[0]"),
            Err(PathError::MissingRoot(_))
        ));
        assert!(matches!(
            NodePath::parse("rooted.sections[0]"),
            Err(PathError::MissingRoot(_))
        ));
        assert!(matches!(
            NodePath::parse("root..sections[0]"),
            Err(PathError::EmptySegment(_))
        ));
        assert!(matches!(
            NodePath::parse("root.sections[0]."),
            Err(PathError::EmptySegment(_))
        ));
        assert!(matches!(
            NodePath::parse("root.layout"),
            Err(PathError::UnknownField(_))
        ));
        assert!(matches!(
            NodePath::parse("root.sections[-1]"),
            Err(PathError::BadSegment(_))
        ));
        assert!(matches!(
            NodePath::parse("root.sections[99999999999999999999999]"),
            Err(PathError::IndexOverflow(_))
        ));
        assert!(NodePath::parse("").is_err());
    }

    #[test]
    fn test_child_and_parent() {
        let section = NodePath::root().child(Field::Sections, 2);
        let block = section.child(Field::Blocks, 0);
        assert_eq!(block.to_string(), "root.sections[2].blocks[0]");
        assert_eq!(block.parent(), Some(section.clone()));
        assert_eq!(section.parent(), Some(NodePath::root()));
        assert_eq!(NodePath::root().parent(), None);
        assert_eq!(block.ancestors(), vec![NodePath::root(), section]);
    }

    #[test]
    fn test_starts_with_is_segment_wise() {
        let b1: NodePath = "root.sections[0].blocks[1]".parse().unwrap();
        let b10: NodePath = "root.sections[0].blocks[10]".parse().unwrap();
        let inside: NodePath = "root.sections[0].blocks[1].paragraphs[0]".parse().unwrap();

        assert!(inside.starts_with(&b1));
        assert!(b1.starts_with(&b1));
        assert!(!b10.starts_with(&b1));
    }

    #[test]
    fn test_starts_with_matches_canonical_text_prefix() {
        let paths: Vec<NodePath> = [
            "root",
            "root.sections[0]",
            "root.sections[1]",
            "root.sections[10]",
            "root.sections[1].blocks[0]",
            "root.sections[10].blocks[0]",
            "root.sections[1].blocks[1].rows[0].cells[1]",
            "root.sections[1].blocks[11].paragraphs[0].items[0]",
        ]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

        for a in &paths {
            for b in &paths {
                let (text, prefix) = (a.to_string(), b.to_string());
                let textual = text == prefix || text.starts_with(&format!("{}.", prefix));
                assert_eq!(a.starts_with(b), textual, "{} / {}", text, prefix);
            }
        }
    }

    #[test]
    fn test_section_index() {
        let path: NodePath = "root.sections[4].blocks[0]".parse().unwrap();
        assert_eq!(path.section_index(), Some(4));
        assert_eq!(NodePath::root().section_index(), None);
    }
}
