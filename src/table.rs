//! The grid container
//!
//! A `Table` stores `rows * cols` cells in row-major order and is the single
//! source of truth for the coordinate ↔ linear index mapping
//! (`index = y * cols + x`). Its fields are private so that the shape
//! invariant holds after every constructor and structural edit.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellId};
use crate::coordinates::Coordinates;
use crate::error::{Axis, StructureError};

/// Rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unvalidated serialized form
#[derive(Deserialize)]
struct RawTable {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawTable> for Table {
    type Error = StructureError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Table::from_cells(raw.rows, raw.cols, raw.cells)
    }
}

impl Table {
    /// Build a table, creating each cell from its coordinates in row-major order
    pub fn new<F>(rows: usize, cols: usize, mut fill: F) -> Result<Self, StructureError>
    where
        F: FnMut(Coordinates) -> Cell,
    {
        if rows == 0 || cols == 0 {
            return Err(StructureError::EmptyShape);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(fill(coords_from_parts(x, y)));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Wrap existing row-major cells, checking the count against the shape
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, StructureError> {
        if rows == 0 || cols == 0 {
            return Err(StructureError::EmptyShape);
        }
        if cells.len() != rows * cols {
            return Err(StructureError::CellCount {
                rows,
                cols,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Spreadsheet layout: an origin cell, a column header row, a row header
    /// column, and numeric content cells numbered from 1 in row-major order.
    pub fn spreadsheet(rows: usize, cols: usize) -> Result<Self, StructureError> {
        let mut next = 0u64;
        Self::new(rows, cols, |c| match (c.x, c.y) {
            (0, 0) => Cell::origin(),
            (_, 0) => Cell::column_header(),
            (0, _) => Cell::row_header(),
            _ => {
                next += 1;
                Cell::numeric(next)
            }
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed table; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in canonical row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check the shape invariant
    pub fn check_shape(&self) -> Result<(), StructureError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(StructureError::EmptyShape);
        }
        if self.cells.len() != self.rows * self.cols {
            return Err(StructureError::CellCount {
                rows: self.rows,
                cols: self.cols,
                found: self.cells.len(),
            });
        }
        Ok(())
    }

    /// Whether `coords` lies inside the table
    pub fn has_coords(&self, coords: Coordinates) -> bool {
        self.index_of_coords(coords).is_some()
    }

    /// Linear index of `coords`, if inside the table
    pub fn index_of_coords(&self, coords: Coordinates) -> Option<usize> {
        let x = usize::try_from(coords.x).ok()?;
        let y = usize::try_from(coords.y).ok()?;
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y * self.cols + x)
    }

    pub fn cell_at_coords(&self, coords: Coordinates) -> Option<&Cell> {
        self.index_of_coords(coords)
            .and_then(|index| self.cells.get(index))
    }

    pub fn nth_cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn nth_cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Coordinates of the cell at linear `index`
    pub fn nth_cell_coords(&self, index: usize) -> Option<Coordinates> {
        if index >= self.rows * self.cols {
            return None;
        }
        Some(coords_from_parts(index % self.cols, index / self.cols))
    }

    /// Where a cell currently sits, found from its position in storage
    pub fn coords_of_cell(&self, id: CellId) -> Option<Coordinates> {
        let index = self.cells.iter().position(|cell| cell.id() == id)?;
        self.nth_cell_coords(index)
    }

    // === Structural edits ===

    /// Insert a whole row before row `at` (`at == rows` appends)
    pub fn insert_row<F>(&mut self, at: usize, mut fill: F) -> Result<(), StructureError>
    where
        F: FnMut(Coordinates) -> Cell,
    {
        if at > self.rows {
            return Err(StructureError::LineOutOfRange {
                axis: Axis::Row,
                index: at,
                len: self.rows,
            });
        }
        let start = at * self.cols;
        let new_cells: Vec<Cell> = (0..self.cols)
            .map(|x| fill(coords_from_parts(x, at)))
            .collect();
        self.cells.splice(start..start, new_cells);
        self.rows += 1;
        tracing::debug!(row = at, rows = self.rows, "inserted table row");
        Ok(())
    }

    /// Remove row `at`, returning its cells left to right
    pub fn remove_row(&mut self, at: usize) -> Result<Vec<Cell>, StructureError> {
        if at >= self.rows {
            return Err(StructureError::LineOutOfRange {
                axis: Axis::Row,
                index: at,
                len: self.rows,
            });
        }
        if self.rows == 1 {
            return Err(StructureError::EmptyShape);
        }
        let start = at * self.cols;
        let removed = self.cells.drain(start..start + self.cols).collect();
        self.rows -= 1;
        tracing::debug!(row = at, rows = self.rows, "removed table row");
        Ok(removed)
    }

    /// Insert a whole column before column `at` (`at == cols` appends)
    pub fn insert_column<F>(&mut self, at: usize, mut fill: F) -> Result<(), StructureError>
    where
        F: FnMut(Coordinates) -> Cell,
    {
        if at > self.cols {
            return Err(StructureError::LineOutOfRange {
                axis: Axis::Column,
                index: at,
                len: self.cols,
            });
        }
        let new_cols = self.cols + 1;
        let mut cells = Vec::with_capacity(self.rows * new_cols);
        let mut old = std::mem::take(&mut self.cells).into_iter();
        for y in 0..self.rows {
            for x in 0..new_cols {
                if x == at {
                    cells.push(fill(coords_from_parts(x, y)));
                } else if let Some(cell) = old.next() {
                    cells.push(cell);
                }
            }
        }
        self.cells = cells;
        self.cols = new_cols;
        tracing::debug!(column = at, cols = self.cols, "inserted table column");
        Ok(())
    }

    /// Remove column `at`, returning its cells top to bottom
    pub fn remove_column(&mut self, at: usize) -> Result<Vec<Cell>, StructureError> {
        if at >= self.cols {
            return Err(StructureError::LineOutOfRange {
                axis: Axis::Column,
                index: at,
                len: self.cols,
            });
        }
        if self.cols == 1 {
            return Err(StructureError::EmptyShape);
        }
        let cols = self.cols;
        let mut removed = Vec::with_capacity(self.rows);
        let mut kept = Vec::with_capacity(self.rows * (cols - 1));
        for (index, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            if index % cols == at {
                removed.push(cell);
            } else {
                kept.push(cell);
            }
        }
        self.cells = kept;
        self.cols -= 1;
        tracing::debug!(column = at, cols = self.cols, "removed table column");
        Ok(removed)
    }
}

/// Table indices are bounded by allocation size, far below `i32::MAX` in practice
fn coords_from_parts(x: usize, y: usize) -> Coordinates {
    Coordinates::new(
        i32::try_from(x).unwrap_or(i32::MAX),
        i32::try_from(y).unwrap_or(i32::MAX),
    )
}
