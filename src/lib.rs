//! cellgrid - coordinates and selection for grids in documents
//!
//! This crate overlays a rectangular, spreadsheet-like coordinate system on
//! a hierarchical document whose root holds a single table node. It maps
//! between `(x, y)` coordinates, linear cell indices and document paths,
//! tracks the selected cell through the host's focus, and gates in-cell
//! text edits through per-cell validators.

pub mod cell;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod coordinates;
pub mod csv;
pub mod document;
pub mod error;
pub mod grid;
pub mod input;
pub mod render;
pub mod table;
pub mod tracing;
pub mod validation;

// Re-export commonly used types
pub use cell::{Cell, CellId, CellKind, CellType, TextContent};
pub use config::GridConfig;
pub use coordinates::{CoordinateTranslation, Coordinates, Direction};
pub use document::{DocPath, Document, EditOutcome, GridHost, Node};
pub use error::{GridError, Result, StructureError};
pub use grid::{GridCell, GridEditor};
pub use input::NavigationKeys;
pub use table::Table;
pub use validation::{TextOperation, ValidatorRegistry};
