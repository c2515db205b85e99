//! Coordinate and selection engine
//!
//! [`GridEditor`] wraps a [`GridHost`](crate::document::GridHost) and speaks
//! grid coordinates on top of the host's tree paths:
//!
//! - path ↔ coordinate translation (`path_of_coords`, `coords_of_path`)
//! - typed cell lookups, including lookups relative to another cell
//! - lazy iteration over the whole table, one row, or one column
//! - the single active-cell selection, derived from the host focus
//!
//! # Selection
//!
//! ```text
//! Unselected ──select_cell(in bounds)──▶ SelectedAt(c)
//! SelectedAt(c) ──move_selection(d), c+d in bounds──▶ SelectedAt(c+d)
//! SelectedAt(c) ──move_selection(d), c+d outside──▶ SelectedAt(c)
//! any ──host focus loss──▶ Unselected
//! ```

mod editor;
mod iter;
mod selection;

pub use editor::GridEditor;
pub use iter::{CellIter, GridCell, LineIter};
