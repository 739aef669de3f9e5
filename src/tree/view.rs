//! Flattened, expansion-aware tree rows.

use super::children::{children, has_children, root_entry, ChildEntry};
use crate::model::{Document, Node};
use crate::path::NodePath;
use crate::selection::SelectionState;

/// Depth beyond which rows are never expanded.
///
/// The deepest structure a snapshot can hold is eight levels
/// (an inline text frame inside a table cell).
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// One visible row of the tree.
#[derive(Debug, Clone)]
pub struct TreeRow<'a> {
    pub node: Node<'a>,
    pub path: NodePath,
    /// Number of path segments below the root
    pub depth: usize,
    pub label: String,
    pub icon: &'static str,
    pub summary: Option<String>,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
}

impl TreeRow<'_> {
    /// Disclosure marker: `▾` expanded, `▸` collapsed, blank for leaves.
    pub fn marker(&self) -> &'static str {
        match (self.has_children, self.expanded) {
            (false, _) => " ",
            (true, true) => "▾",
            (true, false) => "▸",
        }
    }
}

/// Builds the visible rows of a snapshot's tree.
#[derive(Debug, Clone)]
pub struct TreeView<'a> {
    doc: &'a Document,
    max_depth: usize,
    expand_all: bool,
}

impl<'a> TreeView<'a> {
    /// Create a view over a snapshot.
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            max_depth: DEFAULT_MAX_DEPTH,
            expand_all: false,
        }
    }

    /// Set the depth cap and return self.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Ignore the expansion set and show every node.
    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }

    /// Visible rows in display order.
    ///
    /// Highlighting compares each row's path with the selected path, so a
    /// selected node is marked whenever its row is visible, regardless of how
    /// it was selected.
    pub fn rows(&self, selection: &SelectionState) -> Vec<TreeRow<'a>> {
        let mut rows = Vec::new();
        let mut stack: Vec<ChildEntry<'a>> = vec![root_entry(self.doc)];

        while let Some(entry) = stack.pop() {
            let depth = entry.path.depth();
            let has_children = has_children(entry.node);
            let expanded = has_children
                && depth < self.max_depth
                && (self.expand_all || selection.is_expanded(&entry.path));

            if expanded {
                // reversed so the first child is popped first
                stack.extend(children(entry.node, &entry.path).into_iter().rev());
            }

            rows.push(TreeRow {
                node: entry.node,
                selected: selection.is_selected(&entry.path),
                path: entry.path,
                depth,
                label: entry.label,
                icon: entry.icon,
                summary: entry.summary,
                has_children,
                expanded,
            });
        }

        rows
    }

    /// Find the visible row for `path`.
    pub fn row_for(&self, selection: &SelectionState, path: &NodePath) -> Option<TreeRow<'a>> {
        self.rows(selection).into_iter().find(|row| &row.path == path)
    }
}
