//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use cellgrid::{Cell, Coordinates, Document, GridEditor, Table};

/// Spreadsheet-style editor: origin, headers, numeric content cells
pub fn spreadsheet_editor(rows: usize, cols: usize) -> GridEditor<Document> {
    GridEditor::new(Document::new(Table::spreadsheet(rows, cols).unwrap()))
}

/// Editor over a table of content cells labelled "x,y"
pub fn labelled_editor(rows: usize, cols: usize) -> GridEditor<Document> {
    let table = Table::new(rows, cols, |c| Cell::content(format!("{},{}", c.x, c.y))).unwrap();
    GridEditor::new(Document::new(table))
}

/// Editor with the cell at (x, y) selected
pub fn selected_editor(rows: usize, cols: usize, x: i32, y: i32) -> GridEditor<Document> {
    let mut editor = labelled_editor(rows, cols);
    editor.select_cell(Coordinates::new(x, y)).unwrap();
    editor
}

/// Text of the cell at (x, y)
pub fn text_at(editor: &GridEditor<Document>, x: i32, y: i32) -> String {
    editor
        .cell_at_coords(Coordinates::new(x, y))
        .unwrap()
        .and_then(Cell::text)
        .unwrap_or_default()
        .to_string()
}
