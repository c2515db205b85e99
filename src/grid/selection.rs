//! Single active-cell selection
//!
//! The selection is never stored here: it is read from the host focus on
//! every query and written back as a focus change.

use super::editor::GridEditor;
use crate::coordinates::{Coordinates, Direction};
use crate::document::GridHost;
use crate::error::Result;
use crate::input::NavigationKeys;

impl<H: GridHost> GridEditor<H> {
    /// Coordinates of the focused cell, or None without focus
    pub fn selected_coords(&self) -> Result<Option<Coordinates>> {
        match self.host().focus() {
            Some(path) => self.coords_of_path(path),
            None => Ok(None),
        }
    }

    /// Row of the focused cell
    pub fn selected_row(&self) -> Result<Option<usize>> {
        Ok(self
            .selected_coords()?
            .and_then(|c| usize::try_from(c.y).ok()))
    }

    /// Column of the focused cell
    pub fn selected_column(&self) -> Result<Option<usize>> {
        Ok(self
            .selected_coords()?
            .and_then(|c| usize::try_from(c.x).ok()))
    }

    /// Focus the cell at `coords`. Coordinates outside the table are ignored.
    pub fn select_cell(&mut self, coords: Coordinates) -> Result<()> {
        let Some(path) = self.path_of_coords(coords)? else {
            tracing::trace!(%coords, "ignoring selection outside the table");
            return Ok(());
        };
        tracing::debug!(%coords, %path, "select cell");
        self.host_mut().set_focus(path);
        Ok(())
    }

    /// Move the selection one cell in `direction`.
    ///
    /// Does nothing without a selection; moving off an edge leaves the
    /// selection where it is.
    pub fn move_selection(&mut self, direction: Direction) -> Result<()> {
        let Some(current) = self.selected_coords()? else {
            return Ok(());
        };
        self.select_cell(current.move_in(direction))
    }

    /// Translate a navigation key into a selection move.
    ///
    /// Returns true if `key` is bound to a direction (whether or not the
    /// selection actually moved), false for any other key.
    pub fn move_selection_by_key(&mut self, keys: &NavigationKeys, key: &str) -> Result<bool> {
        let Some(direction) = keys.direction_for(key) else {
            return Ok(false);
        };
        self.move_selection(direction)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::document::{DocPath, Document};
    use crate::table::Table;

    fn editor(rows: usize, cols: usize) -> GridEditor<Document> {
        GridEditor::new(Document::new(
            Table::new(rows, cols, |_| Cell::content("")).unwrap(),
        ))
    }

    #[test]
    fn test_unselected() {
        let ed = editor(2, 3);
        assert_eq!(ed.selected_coords().unwrap(), None);
        assert_eq!(ed.selected_row().unwrap(), None);
        assert_eq!(ed.selected_column().unwrap(), None);
    }

    #[test]
    fn test_select_cell_sets_focus() {
        let mut ed = editor(2, 3);
        ed.select_cell(Coordinates::new(2, 1)).unwrap();
        assert_eq!(ed.host().focus(), Some(&DocPath::cell(5)));
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(2, 1)));
        assert_eq!(ed.selected_row().unwrap(), Some(1));
        assert_eq!(ed.selected_column().unwrap(), Some(2));
    }

    #[test]
    fn test_select_out_of_bounds_is_noop() {
        let mut ed = editor(2, 3);
        ed.select_cell(Coordinates::new(5, 5)).unwrap();
        assert_eq!(ed.selected_coords().unwrap(), None);

        ed.select_cell(Coordinates::new(1, 0)).unwrap();
        ed.select_cell(Coordinates::new(-1, 0)).unwrap();
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(1, 0)));
    }

    #[test]
    fn test_move_without_selection_is_noop() {
        let mut ed = editor(2, 3);
        ed.move_selection(Direction::Down).unwrap();
        assert_eq!(ed.selected_coords().unwrap(), None);
    }

    #[test]
    fn test_move_selection_and_edges() {
        let mut ed = editor(2, 2);
        ed.select_cell(Coordinates::new(0, 0)).unwrap();

        ed.move_selection(Direction::Up).unwrap();
        ed.move_selection(Direction::Left).unwrap();
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(0, 0)));

        ed.move_selection(Direction::Right).unwrap();
        ed.move_selection(Direction::Down).unwrap();
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(1, 1)));

        ed.move_selection(Direction::Right).unwrap();
        ed.move_selection(Direction::Down).unwrap();
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(1, 1)));
    }

    #[test]
    fn test_focus_in_text_leaf_resolves_to_cell() {
        let mut ed = editor(2, 3);
        ed.host_mut().set_focus(DocPath::cell(4).child(0));
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(1, 1)));
        ed.move_selection(Direction::Left).unwrap();
        assert_eq!(ed.host().focus(), Some(&DocPath::cell(3)));
    }

    #[test]
    fn test_blur_returns_to_unselected() {
        let mut ed = editor(2, 3);
        ed.select_cell(Coordinates::new(1, 1)).unwrap();
        ed.host_mut().blur();
        assert_eq!(ed.selected_coords().unwrap(), None);
    }

    #[test]
    fn test_move_selection_by_key() {
        let mut ed = editor(3, 3);
        let keys = NavigationKeys::default();
        ed.select_cell(Coordinates::new(1, 1)).unwrap();

        assert!(ed.move_selection_by_key(&keys, "ArrowRight").unwrap());
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(2, 1)));

        assert!(ed.move_selection_by_key(&keys, "ArrowRight").unwrap());
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(2, 1)));

        assert!(!ed.move_selection_by_key(&keys, "Enter").unwrap());
        assert_eq!(ed.selected_coords().unwrap(), Some(Coordinates::new(2, 1)));
    }
}
