//! CSV parsing using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields,
//! escaped quotes, and custom delimiters.

use std::io::Cursor;

use crate::cell::Cell;
use crate::table::Table;

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Pipe => b'|',
            Delimiter::Semicolon => b';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Error type for CSV parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse CSV content into a table of content cells.
///
/// With `with_headers`, the data is shifted one row down and one column
/// right behind an origin cell, a column header row and a row header column.
pub fn parse_table(
    content: &str,
    delimiter: Delimiter,
    with_headers: bool,
) -> Result<Table, ParseError> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut rows: Vec<Vec<String>> = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                rows.push(row);
            }
            Err(e) => {
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(line_num + 1),
                });
            }
        }
    }

    let data_cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if rows.is_empty() || data_cols == 0 {
        return Err(ParseError {
            message: "no cells to import".to_string(),
            line: None,
        });
    }

    let offset = usize::from(with_headers);
    let table_rows = rows.len() + offset;
    let table_cols = data_cols + offset;

    let mut cells = Vec::with_capacity(table_rows * table_cols);
    if with_headers {
        cells.push(Cell::origin());
        cells.extend((0..data_cols).map(|_| Cell::column_header()));
    }
    for row in rows {
        if with_headers {
            cells.push(Cell::row_header());
        }
        let width = row.len();
        cells.extend(row.into_iter().map(Cell::content));
        cells.extend((width..data_cols).map(|_| Cell::content("")));
    }

    tracing::debug!(
        rows = table_rows,
        cols = table_cols,
        with_headers,
        "imported CSV table"
    );

    Table::from_cells(table_rows, table_cols, cells).map_err(|e| ParseError {
        message: e.to_string(),
        line: None,
    })
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
