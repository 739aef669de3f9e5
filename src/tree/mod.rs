//! Tree navigation over a snapshot.
//!
//! [`children`] is the single place that knows which node kinds own which
//! child sequences; [`TreeView`] flattens the visible part of the tree into
//! rows for display.

mod children;
mod view;

pub use children::{
    children, has_children, paragraph_preview, root_entry, truncate_chars, ChildEntry, ELLIPSIS,
    PARAGRAPH_PREVIEW_CHARS, TEXT_RUN_LABEL_CHARS,
};
pub use view::{TreeRow, TreeView, DEFAULT_MAX_DEPTH};
