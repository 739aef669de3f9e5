//! Selection and expansion state shared by the tree and the canvas.

use crate::path::NodePath;
use std::collections::HashSet;

/// The selected path and the set of expanded paths.
///
/// The two are independent: no operation changes one as a side effect of
/// changing the other, except the tree-row click, which is defined as both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<NodePath>,
    expanded: HashSet<NodePath>,
}

impl SelectionState {
    /// Create an empty state: nothing selected, nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selected path. Expansion is untouched.
    pub fn select(&mut self, path: Option<NodePath>) {
        self.selected = path;
    }

    /// Select from a path string; a malformed string clears the selection.
    pub fn select_str(&mut self, path: &str) {
        self.selected = NodePath::parse(path).ok();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected path, if any.
    pub fn selected(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    /// Check if `path` is exactly the selected path.
    pub fn is_selected(&self, path: &NodePath) -> bool {
        self.selected.as_ref() == Some(path)
    }

    /// Flip membership of `path` in the expansion set.
    ///
    /// Returns whether the path is expanded afterwards.
    pub fn toggle_expand(&mut self, path: &NodePath) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.clone());
            true
        }
    }

    /// Check if `path` is expanded.
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expanded.contains(path)
    }

    /// The expansion set.
    pub fn expanded(&self) -> &HashSet<NodePath> {
        &self.expanded
    }

    /// Replace the expansion set.
    pub fn set_expanded(&mut self, expanded: impl IntoIterator<Item = NodePath>) {
        self.expanded = expanded.into_iter().collect();
    }

    /// Expand every proper ancestor of `path` so its row becomes visible.
    pub fn expand_ancestors(&mut self, path: &NodePath) {
        self.expanded.extend(path.ancestors());
    }

    /// Tree-row click: select, and toggle expansion when the node has children.
    pub fn click_tree_row(&mut self, path: &NodePath, has_children: bool) {
        self.select(Some(path.clone()));
        if has_children {
            self.toggle_expand(path);
        }
    }

    /// Canvas click on a block: select only.
    pub fn click_canvas(&mut self, path: NodePath) {
        self.select(Some(path));
    }

    /// Clear both selection and expansion.
    pub fn reset(&mut self) {
        self.selected = None;
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Field;

    fn block(i: usize) -> NodePath {
        NodePath::root()
            .child(Field::Sections, 0)
            .child(Field::Blocks, i)
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut state = SelectionState::new();
        state.toggle_expand(&NodePath::root());
        let before = state.expanded().clone();

        assert!(state.toggle_expand(&block(1)));
        assert!(!state.toggle_expand(&block(1)));
        assert_eq!(state.expanded(), &before);
    }

    #[test]
    fn test_select_leaves_expansion_alone() {
        let mut state = SelectionState::new();
        state.toggle_expand(&block(0));
        state.select(Some(block(3)));
        assert!(state.is_expanded(&block(0)));
        state.select(None);
        assert!(state.is_expanded(&block(0)));
    }

    #[test]
    fn test_toggle_leaves_selection_alone() {
        let mut state = SelectionState::new();
        state.select(Some(block(2)));
        state.toggle_expand(&block(2));
        state.toggle_expand(&block(2));
        assert!(state.is_selected(&block(2)));
    }

    #[test]
    fn test_leaf_click_only_selects() {
        let mut state = SelectionState::new();
        state.click_tree_row(&block(0), false);
        assert!(state.is_selected(&block(0)));
        assert!(state.expanded().is_empty());
    }

    #[test]
    fn test_parent_click_selects_and_toggles() {
        let mut state = SelectionState::new();
        state.click_tree_row(&block(0), true);
        assert!(state.is_selected(&block(0)));
        assert!(state.is_expanded(&block(0)));

        state.click_tree_row(&block(0), true);
        assert!(state.is_selected(&block(0)));
        assert!(!state.is_expanded(&block(0)));
    }

    #[test]
    fn test_canvas_click_only_selects() {
        let mut state = SelectionState::new();
        state.toggle_expand(&NodePath::root());
        let before = state.expanded().clone();
        state.click_canvas(block(2));
        assert!(state.is_selected(&block(2)));
        assert_eq!(state.expanded(), &before);
    }

    #[test]
    fn test_select_str_malformed_clears() {
        let mut state = SelectionState::new();
        state.select_str("root.sections[0]");
        assert!(state.selected().is_some());
        state.select_str("root..bogus");
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_expand_ancestors() {
        let mut state = SelectionState::new();
        state.expand_ancestors(&block(2));
        assert!(state.is_expanded(&NodePath::root()));
        assert!(state.is_expanded(&NodePath::root().child(Field::Sections, 0)));
        assert!(!state.is_expanded(&block(2)));
        assert!(state.selected().is_none());
    }
}
