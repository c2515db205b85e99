//! Error types for the grid engine.
//!
//! `StructureError` signals a document whose shape cannot back a grid.
//! `GridError` wraps it together with the few failures that can occur
//! while walking or editing an otherwise well-formed table.

use crate::coordinates::Coordinates;
use crate::document::DocPath;

/// Axis of a whole row or column structural edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// The document cannot be interpreted as a rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// The document root has no children.
    #[error("document root is empty")]
    MissingRoot,

    /// The document root holds more than the single table.
    #[error("document root must hold exactly one table, found {0} nodes")]
    RootCount(usize),

    /// The root's only child is some other kind of node.
    #[error("document root is not a table")]
    NotATable,

    /// Stored cells disagree with the declared shape.
    #[error("table shape {rows}x{cols} does not match its {found} cells")]
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },

    /// A table needs at least one row and one column.
    #[error("table must have at least one row and one column")]
    EmptyShape,

    /// A structural edit addressed a row or column that does not exist.
    #[error("{axis} {index} is out of range for a table with {len} {axis}s")]
    LineOutOfRange { axis: Axis, index: usize, len: usize },
}

/// All errors produced by the grid engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("malformed document: {0}")]
    Structure(#[from] StructureError),

    /// A row or column walk reached a coordinate with no backing cell.
    #[error("no cell at coordinates ({}, {})", .0.x, .0.y)]
    OutOfBounds(Coordinates),

    /// A cell names a validator the host never registered.
    #[error("unknown validator `{0}`")]
    UnknownValidator(String),

    /// A text edit targeted a path that does not address a cell.
    #[error("path {0} does not address a cell")]
    InvalidPath(DocPath),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
