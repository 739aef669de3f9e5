//! Error types for astscope library.

use std::io;
use thiserror::Error;

/// Result type alias for astscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or presenting a document tree.
///
/// Resolving a path that addresses nothing is not an error: it is an empty
/// `Option`. Only the load boundary and the output writers fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The snapshot JSON could not be decoded into a document tree.
    #[error("Failed to parse AST JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file is neither a snapshot nor a source artifact we can hand to the engine.
    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    /// The external engine could not be started.
    #[error("Failed to execute engine: {0}")]
    EngineLaunch(String),

    /// The external engine ran but reported a failure.
    #[error("AST export failed: {0}")]
    Engine(String),

    /// A path string does not follow the path grammar.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Error while producing output (SVG, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<crate::path::PathError> for Error {
    fn from(err: crate::path::PathError) -> Self {
        Error::InvalidPath(err.to_string())
    }
}
