//! # astscope
//!
//! Inspector for the AST snapshots a document conversion engine exports.
//!
//! A snapshot is an immutable tree: sections (pages) own blocks, blocks own
//! paragraphs or table rows, and paragraphs own inline items. This library
//! addresses any node by a textual path, enumerates the tree for display,
//! draws a page with its blocks at their real positions and maps pointer
//! positions back to nodes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use astscope::{load_file, resolve};
//!
//! fn main() -> astscope::Result<()> {
//!     // Read a snapshot exported with `--export-ast`
//!     let doc = load_file("book.ast.json")?;
//!
//!     // Look a node up by path
//!     if let Some(node) = resolve(&doc, "root.sections[0].blocks[2]") {
//!         println!("{:?}", node.kind());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Path addressing**: `root.sections[0].blocks[2].rows[1].cells[0]`
//! - **Tree enumeration**: labels, icons and summaries per node kind
//! - **Page canvas**: draw commands and SVG, with hit-testing that matches
//! - **Detail view**: scalar attributes with type-based tones
//! - **Engine sources**: run the engine asynchronously (`async` feature)
//! - **Statistics**: node counts, collected in parallel with Rayon

pub mod canvas;
pub mod detect;
pub mod error;
pub mod model;
pub mod path;
pub mod render;
pub mod selection;
pub mod session;
pub mod source;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use canvas::{CanvasOptions, Point, Scene, SpatialRenderer, Viewport};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_snapshot, InputFormat};
pub use error::{Error, Result};
pub use model::{
    Block, Document, Figure, InlineItem, InlineObject, Node, NodeKind, Paragraph, Section, Table,
    TableCell, TableRow, TextFrameBlock, TextRun,
};
pub use path::{resolve, resolve_path, Field, NodePath, PathError, Segment};
pub use render::{DetailInspector, DetailRow, JsonFormat};
pub use selection::SelectionState;
pub use session::{InspectorSession, LoadOutcome, LoadState, LoadTicket};
pub use source::{load_file, parse_bytes, parse_str, EngineConfig};
pub use stats::DocumentStats;
pub use tree::{children, ChildEntry, TreeRow, TreeView};

#[cfg(feature = "async")]
pub use source::{SourceRegistry, TreeSource};

use std::path::Path;

/// Serialize a snapshot back to JSON.
///
/// # Example
///
/// ```
/// use astscope::{parse_str, to_json, JsonFormat};
///
/// let doc = parse_str(r#"{"sections":[{"pageNumber":1}]}"#).unwrap();
/// let json = to_json(&doc, JsonFormat::Compact).unwrap();
/// assert!(json.contains("\"pageNumber\":1"));
/// ```
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    render::to_json(doc, format)
}

/// Read a snapshot file and open a session on it.
///
/// # Example
///
/// ```no_run
/// let session = astscope::open_file("book.ast.json")?;
/// println!("{}", session.header().unwrap());
/// # Ok::<(), astscope::Error>(())
/// ```
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<InspectorSession> {
    let doc = load_file(path)?;
    Ok(InspectorSession::with_document(doc))
}

/// Produce a snapshot for any supported input: a JSON snapshot is read
/// directly, anything else goes through the engine.
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> astscope::Result<()> {
/// use astscope::{request, EngineConfig};
///
/// let doc = request("book.idml", EngineConfig::from_env()).await?;
/// println!("{} sections", doc.section_count());
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn request<P: AsRef<Path>>(path: P, engine: EngineConfig) -> Result<Document> {
    SourceRegistry::with_defaults(engine)
        .request(path.as_ref())
        .await
}
