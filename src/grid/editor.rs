//! Table access, path translation and typed lookups

use super::iter::{CellIter, LineIter};
use crate::cell::{column_label, row_label, Cell, CellId, CellKind, CellType};
use crate::coordinates::{CoordinateTranslation, Coordinates};
use crate::document::{DocPath, GridHost};
use crate::error::{GridError, Result};
use crate::table::Table;
use crate::validation::{check_cell_edit, EditCheck, TextOperation};

/// Grid view over a host document
#[derive(Debug, Clone)]
pub struct GridEditor<H> {
    host: H,
}

impl<H: GridHost> GridEditor<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The document's root table, see [`GridHost::root_table`]
    pub fn table(&self) -> Result<&Table> {
        self.host.root_table()
    }

    /// Path of the `n`th cell in row-major order
    pub fn nth_cell_path(n: usize) -> DocPath {
        DocPath::cell(n)
    }

    /// Document path of the cell at `coords`, or None outside the table
    pub fn path_of_coords(&self, coords: Coordinates) -> Result<Option<DocPath>> {
        Ok(self
            .table()?
            .index_of_coords(coords)
            .map(Self::nth_cell_path))
    }

    /// Coordinates of the cell addressed by (or containing) `path`
    pub fn coords_of_path(&self, path: &DocPath) -> Result<Option<Coordinates>> {
        let table = self.table()?;
        Ok(path
            .cell_index()
            .and_then(|index| table.nth_cell_coords(index)))
    }

    pub fn cell_at_coords(&self, coords: Coordinates) -> Result<Option<&Cell>> {
        Ok(self.table()?.cell_at_coords(coords))
    }

    /// The cell at `coords` if it has type `cell_type`.
    ///
    /// Absent and wrongly-typed cells both give `None`; use
    /// [`cell_at_coords`](Self::cell_at_coords) to tell them apart.
    pub fn cell_of_type_at_coords(
        &self,
        coords: Coordinates,
        cell_type: &CellType,
    ) -> Result<Option<&Cell>> {
        Ok(self
            .cell_at_coords(coords)?
            .filter(|cell| cell.is_cell_type(cell_type)))
    }

    /// Current coordinates of the cell with identity `id`
    pub fn coords_of_cell(&self, id: CellId) -> Result<Option<Coordinates>> {
        Ok(self.table()?.coords_of_cell(id))
    }

    /// The cell of type `cell_type` found `translation` away from cell `base`
    pub fn relative_cell(
        &self,
        base: CellId,
        translation: CoordinateTranslation,
        cell_type: &CellType,
    ) -> Result<Option<&Cell>> {
        let Some(base_coords) = self.coords_of_cell(base)? else {
            return Ok(None);
        };
        self.cell_of_type_at_coords(base_coords.translate(translation), cell_type)
    }

    /// Display label of a header cell: column letters counted from the first
    /// data column, the row number, or an empty string for the origin.
    /// None for content cells and positions outside the table.
    pub fn header_label(&self, coords: Coordinates) -> Result<Option<String>> {
        let Some(cell) = self.cell_at_coords(coords)? else {
            return Ok(None);
        };
        // Header coordinates come from inside the table, so they are non-negative
        let x = usize::try_from(coords.x).unwrap_or_default();
        let y = usize::try_from(coords.y).unwrap_or_default();
        Ok(match cell.kind {
            CellKind::Origin => Some(String::new()),
            CellKind::ColumnHeader => Some(column_label(x.saturating_sub(1))),
            CellKind::RowHeader => Some(row_label(y)),
            CellKind::Content(_) | CellKind::Custom { .. } => None,
        })
    }

    /// Iterate over all cells in row-major order (or its reverse)
    pub fn iterate_cells(&self, reverse: bool) -> Result<CellIter<'_>> {
        Ok(CellIter::new(self.table()?, reverse))
    }

    /// Iterate over the cells of one row, left to right (or right to left)
    pub fn iterate_row(&self, row: usize, reverse: bool) -> Result<LineIter<'_>> {
        Ok(LineIter::row(self.table()?, row, reverse))
    }

    /// Iterate over the cells of one column, top to bottom (or bottom to top)
    pub fn iterate_column(&self, column: usize, reverse: bool) -> Result<LineIter<'_>> {
        Ok(LineIter::column(self.table()?, column, reverse))
    }

    /// Check whether `op` would be accepted by the cell at `path`.
    ///
    /// Pure pre-commit check: header cells and rejected edits return false.
    pub fn validate_edit(&self, path: &DocPath, op: &TextOperation) -> Result<bool> {
        self.table()?;
        let cell = self
            .host
            .cell_at_path(path)
            .ok_or_else(|| GridError::InvalidPath(path.clone()))?;
        let check = check_cell_edit(cell, self.host.validators(), op)?;
        Ok(check == EditCheck::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::TextContent;
    use crate::document::{Document, Node};
    use crate::error::StructureError;

    fn editor(rows: usize, cols: usize) -> GridEditor<Document> {
        GridEditor::new(Document::new(Table::spreadsheet(rows, cols).unwrap()))
    }

    #[test]
    fn test_table_errors() {
        let empty = GridEditor::new(Document::from_nodes(vec![]));
        assert_eq!(
            empty.table().unwrap_err(),
            GridError::Structure(StructureError::MissingRoot)
        );

        let block = GridEditor::new(Document::from_nodes(vec![Node::Block {
            text: String::new(),
        }]));
        assert_eq!(
            block.table().unwrap_err(),
            GridError::Structure(StructureError::NotATable)
        );

        let table = Table::spreadsheet(2, 2).unwrap();
        let two = GridEditor::new(Document::from_nodes(vec![
            Node::Table(table.clone()),
            Node::Table(table),
        ]));
        assert_eq!(
            two.table().unwrap_err(),
            GridError::Structure(StructureError::RootCount(2))
        );
    }

    #[test]
    fn test_path_of_coords() {
        let ed = editor(2, 3);
        assert_eq!(
            ed.path_of_coords(Coordinates::new(1, 1)).unwrap(),
            Some(DocPath::cell(4))
        );
        assert_eq!(ed.path_of_coords(Coordinates::new(3, 0)).unwrap(), None);
        assert_eq!(ed.path_of_coords(Coordinates::new(-1, 0)).unwrap(), None);
    }

    #[test]
    fn test_coords_of_path() {
        let ed = editor(2, 3);
        assert_eq!(
            ed.coords_of_path(&DocPath::cell(5)).unwrap(),
            Some(Coordinates::new(2, 1))
        );
        assert_eq!(
            ed.coords_of_path(&DocPath::cell(5).child(0)).unwrap(),
            Some(Coordinates::new(2, 1))
        );
        assert_eq!(ed.coords_of_path(&DocPath::cell(6)).unwrap(), None);
        assert_eq!(ed.coords_of_path(&DocPath::new(vec![0])).unwrap(), None);
    }

    #[test]
    fn test_cell_of_type_at_coords() {
        let ed = editor(3, 3);
        let header = Coordinates::new(1, 0);
        assert!(ed
            .cell_of_type_at_coords(header, &CellType::ColumnHeader)
            .unwrap()
            .is_some());
        // Wrong type and absent both come back empty
        assert!(ed
            .cell_of_type_at_coords(header, &CellType::Content)
            .unwrap()
            .is_none());
        assert!(ed
            .cell_of_type_at_coords(Coordinates::new(9, 9), &CellType::Content)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_relative_cell() {
        let ed = editor(4, 3);
        let header_id = ed
            .cell_at_coords(Coordinates::new(2, 0))
            .unwrap()
            .unwrap()
            .id();

        let below = ed
            .relative_cell(header_id, CoordinateTranslation::new(0, 2), &CellType::Content)
            .unwrap()
            .unwrap();
        assert_eq!(
            ed.coords_of_cell(below.id()).unwrap(),
            Some(Coordinates::new(2, 2))
        );

        assert!(ed
            .relative_cell(header_id, CoordinateTranslation::new(0, -1), &CellType::Content)
            .unwrap()
            .is_none());
        assert!(ed
            .relative_cell(CellId(u64::MAX), CoordinateTranslation::default(), &CellType::Content)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_header_labels() {
        let ed = editor(3, 4);
        let label = |x, y| ed.header_label(Coordinates::new(x, y)).unwrap();
        assert_eq!(label(0, 0), Some(String::new()));
        assert_eq!(label(1, 0), Some("A".to_string()));
        assert_eq!(label(3, 0), Some("C".to_string()));
        assert_eq!(label(0, 2), Some("2".to_string()));
        assert_eq!(label(1, 1), None);
        assert_eq!(label(7, 7), None);
    }

    #[test]
    fn test_validate_edit() {
        let mut doc = Document::new(
            Table::new(1, 2, |c| {
                if c.x == 0 {
                    Cell::numeric(1)
                } else {
                    Cell::custom("short", TextContent::with_validator("ab", "max3"))
                }
            })
            .unwrap(),
        );
        doc.validators_mut()
            .register("max3", |s| s.chars().count() <= 3);
        let ed = GridEditor::new(doc);

        assert!(ed
            .validate_edit(&DocPath::cell(0), &TextOperation::insert(1, "2"))
            .unwrap());
        assert!(!ed
            .validate_edit(&DocPath::cell(0), &TextOperation::insert(1, "z"))
            .unwrap());
        assert!(ed
            .validate_edit(&DocPath::cell(1), &TextOperation::insert(2, "c"))
            .unwrap());
        assert!(!ed
            .validate_edit(&DocPath::cell(1), &TextOperation::insert(2, "cd"))
            .unwrap());
        assert!(ed
            .validate_edit(&DocPath::cell(7), &TextOperation::insert(0, "1"))
            .is_err());
    }
}
