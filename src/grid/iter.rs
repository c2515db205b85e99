//! Lazy cell iterators
//!
//! Each iterator borrows the table and owns its own cursor, so independent
//! walks never share state and a fresh call always starts over.

use std::iter::FusedIterator;

use crate::cell::Cell;
use crate::coordinates::{Coordinates, Direction};
use crate::document::DocPath;
use crate::error::{Axis, GridError, Result};
use crate::table::Table;

/// A cell together with its coordinates and document path
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<'a> {
    pub cell: &'a Cell,
    pub coords: Coordinates,
    pub path: DocPath,
}

impl<'a> GridCell<'a> {
    fn at_index(table: &'a Table, index: usize) -> Option<Self> {
        Some(Self {
            cell: table.nth_cell(index)?,
            coords: table.nth_cell_coords(index)?,
            path: DocPath::cell(index),
        })
    }
}

/// Walks every cell in row-major order, or its reverse
#[derive(Debug, Clone)]
pub struct CellIter<'a> {
    table: &'a Table,
    front: usize,
    back: usize,
    reverse: bool,
}

impl<'a> CellIter<'a> {
    pub(crate) fn new(table: &'a Table, reverse: bool) -> Self {
        Self {
            table,
            front: 0,
            back: table.len(),
            reverse,
        }
    }

    fn take_front(&mut self) -> Option<GridCell<'a>> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        GridCell::at_index(self.table, index)
    }

    fn take_back(&mut self) -> Option<GridCell<'a>> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        GridCell::at_index(self.table, self.back)
    }
}

impl<'a> Iterator for CellIter<'a> {
    type Item = GridCell<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reverse {
            self.take_back()
        } else {
            self.take_front()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for CellIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reverse {
            self.take_front()
        } else {
            self.take_back()
        }
    }
}

impl ExactSizeIterator for CellIter<'_> {}

impl FusedIterator for CellIter<'_> {}

/// Walks one row (left to right) or one column (top to bottom), or the reverse.
///
/// Yields `Err(GridError::OutOfBounds)` and stops as soon as a computed
/// coordinate has no backing cell.
#[derive(Debug, Clone)]
pub struct LineIter<'a> {
    table: &'a Table,
    axis: Axis,
    reverse: bool,
    next: Option<Coordinates>,
}

impl<'a> LineIter<'a> {
    pub(crate) fn row(table: &'a Table, row: usize, reverse: bool) -> Self {
        let y = to_coord(row);
        let x = if reverse { to_coord(table.cols()) - 1 } else { 0 };
        Self {
            table,
            axis: Axis::Row,
            reverse,
            next: Some(Coordinates::new(x, y)),
        }
    }

    pub(crate) fn column(table: &'a Table, column: usize, reverse: bool) -> Self {
        let x = to_coord(column);
        let y = if reverse { to_coord(table.rows()) - 1 } else { 0 };
        Self {
            table,
            axis: Axis::Column,
            reverse,
            next: Some(Coordinates::new(x, y)),
        }
    }

    fn step(&self) -> Direction {
        match (self.axis, self.reverse) {
            (Axis::Row, false) => Direction::Right,
            (Axis::Row, true) => Direction::Left,
            (Axis::Column, false) => Direction::Down,
            (Axis::Column, true) => Direction::Up,
        }
    }

    /// Whether the walk has not yet run past the end of its line
    fn within_line(&self, coords: Coordinates) -> bool {
        let (position, len) = match self.axis {
            Axis::Row => (coords.x, self.table.cols()),
            Axis::Column => (coords.y, self.table.rows()),
        };
        if self.reverse {
            position >= 0
        } else {
            position < to_coord(len)
        }
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = Result<GridCell<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let coords = self.next.take()?;
        if !self.within_line(coords) {
            return None;
        }
        let Some(index) = self.table.index_of_coords(coords) else {
            return Some(Err(GridError::OutOfBounds(coords)));
        };
        self.next = Some(coords.move_in(self.step()));
        GridCell::at_index(self.table, index).map(Ok)
    }
}

impl FusedIterator for LineIter<'_> {}

fn to_coord(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
