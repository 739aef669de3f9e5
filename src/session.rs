//! The inspector's state: one snapshot, its load lifecycle, the selection and
//! the current page.

use crate::canvas::{Point, Scene, SpatialRenderer, Viewport};
use crate::model::{Document, Node, Section};
use crate::path::{resolve_path, NodePath};
use crate::selection::SelectionState;
use crate::tree::{has_children, TreeRow, TreeView};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

/// Identifies one load request; only the newest one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the session is in the load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet, or reset
    Idle,
    /// A request is outstanding
    Loading {
        ticket: LoadTicket,
        started: DateTime<Utc>,
    },
    /// The last request produced the current snapshot
    Loaded { at: DateTime<Utc> },
    /// The last request failed; the message is shown as-is
    Failed { message: String },
}

/// What `complete_load` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot was replaced
    Applied,
    /// The error was recorded
    Failed,
    /// A newer request (or a reset) superseded this one; nothing changed
    Stale,
}

/// Summary line shown above the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHeader {
    pub section_count: usize,
    /// Display number of the current page
    pub current_page: Option<String>,
    pub font_count: usize,
    pub paragraph_style_count: usize,
}

impl fmt::Display for SessionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(page) = &self.current_page {
            write!(f, "Page: {} ({}p)  ", page, self.section_count)?;
        }
        write!(f, "{}F {}PS", self.font_count, self.paragraph_style_count)
    }
}

/// Owns everything the tree view, the canvas and the detail view share.
///
/// State changes go through methods; the snapshot is swapped whole and never
/// edited.
#[derive(Debug, Clone)]
pub struct InspectorSession {
    snapshot: Option<Arc<Document>>,
    state: LoadState,
    selection: SelectionState,
    current_section: usize,
    next_ticket: u64,
    pending: Option<LoadTicket>,
}

impl Default for InspectorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectorSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            snapshot: None,
            state: LoadState::Idle,
            selection: SelectionState::new(),
            current_section: 0,
            next_ticket: 0,
            pending: None,
        }
    }

    /// Create a session that already holds `doc`.
    pub fn with_document(doc: Document) -> Self {
        let mut session = Self::new();
        let ticket = session.begin_load();
        session.complete_load(ticket, Ok::<_, crate::Error>(doc));
        session
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Option<&Arc<Document>> {
        self.snapshot.as_ref()
    }

    /// The current document.
    pub fn document(&self) -> Option<&Document> {
        self.snapshot.as_deref()
    }

    /// The load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Check if a load is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// Message of the last failed load.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Start a load. Any earlier outstanding ticket becomes stale.
    ///
    /// The current snapshot stays visible until a result is applied.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        if let Some(previous) = self.pending.replace(ticket) {
            debug!("load {} supersedes {}", ticket, previous);
        }
        self.state = LoadState::Loading {
            ticket,
            started: Utc::now(),
        };
        debug!("load {} started", ticket);
        ticket
    }

    /// Apply the result of the load identified by `ticket`.
    ///
    /// On success the snapshot is replaced in one step, the selection is
    /// cleared, only the root is expanded and the first page becomes current.
    /// On failure the error text is kept verbatim and the snapshot is left
    /// as it was.
    pub fn complete_load<E: fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<Document, E>,
    ) -> LoadOutcome {
        if self.pending != Some(ticket) {
            warn!("discarding result of stale load {}", ticket);
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(doc) => {
                debug!("load {} applied: {} sections", ticket, doc.section_count());
                self.snapshot = Some(Arc::new(doc));
                self.selection.reset();
                self.selection.set_expanded([NodePath::root()]);
                self.current_section = 0;
                self.state = LoadState::Loaded { at: Utc::now() };
                LoadOutcome::Applied
            }
            Err(err) => {
                let message = err.to_string();
                warn!("load {} failed: {}", ticket, message);
                self.state = LoadState::Failed { message };
                LoadOutcome::Failed
            }
        }
    }

    /// Request a snapshot from `source` and apply it.
    #[cfg(feature = "async")]
    pub async fn load(
        &mut self,
        source: &dyn crate::source::TreeSource,
        artifact: &std::path::Path,
    ) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = source.request(artifact).await;
        self.complete_load(ticket, result)
    }

    /// Drop the snapshot and all view state. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.snapshot = None;
        self.state = LoadState::Idle;
        self.selection.reset();
        self.current_section = 0;
        self.pending = None;
    }

    /// Selection and expansion state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The selected path.
    pub fn selected_path(&self) -> Option<&NodePath> {
        self.selection.selected()
    }

    /// The node the selected path resolves to in the current snapshot.
    pub fn selected_node(&self) -> Option<Node<'_>> {
        let doc = self.document()?;
        resolve_path(doc, self.selection.selected()?)
    }

    /// Set or clear the selected path.
    pub fn select(&mut self, path: Option<NodePath>) {
        self.selection.select(path);
    }

    /// Flip expansion of `path`.
    pub fn toggle_expand(&mut self, path: &NodePath) -> bool {
        self.selection.toggle_expand(path)
    }

    /// Expand the ancestors of `path`.
    pub fn reveal(&mut self, path: &NodePath) {
        self.selection.expand_ancestors(path);
    }

    /// Handle a click on the tree row for `path`.
    ///
    /// Selects the path, and toggles its expansion when the node there has
    /// children.
    pub fn click_tree_row(&mut self, path: &NodePath) {
        let expandable = self
            .document()
            .and_then(|doc| resolve_path(doc, path))
            .map_or(false, has_children);
        self.selection.click_tree_row(path, expandable);
    }

    /// Handle a click on the canvas. Selects the topmost block under `point`;
    /// a miss leaves the selection unchanged.
    pub fn click_canvas(
        &mut self,
        renderer: &SpatialRenderer,
        viewport: Viewport,
        point: Point,
    ) -> Option<NodePath> {
        let index = self.current_section;
        let hit = renderer.hit(self.current_section()?, index, viewport, point)?;
        self.selection.click_canvas(hit.clone());
        Some(hit)
    }

    /// Index of the page shown on the canvas.
    pub fn current_section_index(&self) -> usize {
        self.current_section
    }

    /// The page shown on the canvas.
    pub fn current_section(&self) -> Option<&Section> {
        self.document()?.section(self.current_section)
    }

    /// Change the current page. Out-of-range indices are ignored.
    pub fn set_section(&mut self, index: usize) -> bool {
        let in_range = self
            .document()
            .map_or(false, |doc| index < doc.section_count());
        if in_range {
            self.current_section = index;
        }
        in_range
    }

    /// Visible tree rows.
    pub fn tree_rows(&self) -> Vec<TreeRow<'_>> {
        match self.document() {
            Some(doc) => TreeView::new(doc).rows(&self.selection),
            None => Vec::new(),
        }
    }

    /// Draw the current page.
    pub fn draw(&self, renderer: &SpatialRenderer, viewport: Viewport) -> Option<Scene> {
        let section = self.current_section()?;
        Some(renderer.draw(
            section,
            self.current_section,
            self.selection.selected(),
            viewport,
        ))
    }

    /// Header summary, when a snapshot is loaded.
    pub fn header(&self) -> Option<SessionHeader> {
        let doc = self.document()?;
        Some(SessionHeader {
            section_count: doc.section_count(),
            current_page: self
                .current_section()
                .map(|s| s.display_number(self.current_section)),
            font_count: doc.fonts.len(),
            paragraph_style_count: doc.paragraph_styles.len(),
        })
    }
}
