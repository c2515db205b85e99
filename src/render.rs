//! Plain-text grid rendering
//!
//! Renders a table as aligned columns for terminal output:
//! - Header cells show their labels (A, B, ... / 1, 2, ...)
//! - Numbers are right-aligned, text is left-aligned
//! - The selected cell is wrapped in brackets

use crate::document::GridHost;
use crate::error::Result;
use crate::grid::GridEditor;

/// Widest a rendered column may get before its cells are truncated
pub const MAX_COLUMN_WIDTH: usize = 24;

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Render the editor's table, one line per row
pub fn render_text<H: GridHost>(editor: &GridEditor<H>) -> Result<String> {
    let table = editor.table()?;
    let selected = editor.selected_coords()?;

    let mut grid: Vec<Vec<String>> = vec![Vec::with_capacity(table.cols()); table.rows()];
    for item in editor.iterate_cells(false)? {
        let label = match editor.header_label(item.coords)? {
            Some(label) => label,
            None => item.cell.text().unwrap_or_default().to_string(),
        };
        let mut label = truncate_text(&label, MAX_COLUMN_WIDTH);
        if selected == Some(item.coords) {
            label = format!("[{}]", label);
        }
        if let Some(row) = usize::try_from(item.coords.y)
            .ok()
            .and_then(|y| grid.get_mut(y))
        {
            row.push(label);
        }
    }

    let widths: Vec<usize> = (0..table.cols())
        .map(|x| {
            grid.iter()
                .filter_map(|row| row.get(x))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in &grid {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                if is_number(cell.trim_matches(|c| c == '[' || c == ']')) {
                    format!("{:>width$}", cell, width = width)
                } else {
                    format!("{:<width$}", cell, width = width)
                }
            })
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }
    Ok(out)
}
