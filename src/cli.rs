//! Command-line argument parsing
//!
//! Supports:
//! - Creating a spreadsheet-style table or loading one from CSV/JSON
//! - Selecting a cell and moving the selection by key names
//! - Inserting text into the selected cell through the validated edit path

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::GridConfig;
use crate::coordinates::Coordinates;

/// A coordinate and selection engine for document grids
#[derive(Parser, Debug)]
#[command(
    name = "cellgrid",
    version,
    about = "Build a grid, move the selection and edit cells"
)]
pub struct CliArgs {
    /// Rows of a new table (defaults to the config value)
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Columns of a new table (defaults to the config value)
    #[arg(long, value_name = "N")]
    pub cols: Option<usize>,

    /// Lay the table out without origin and header cells
    #[arg(long)]
    pub no_headers: bool,

    /// Load the table from a CSV/TSV/PSV file
    #[arg(long, value_name = "FILE", conflicts_with = "table")]
    pub csv: Option<PathBuf>,

    /// Load the table from a JSON file
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Select the cell at X,Y before applying keys
    #[arg(long, value_name = "X,Y")]
    pub select: Option<String>,

    /// Comma-separated key names to feed to the selection, e.g. ArrowDown,ArrowRight
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Text to append to the selected cell
    #[arg(long, value_name = "TEXT")]
    pub insert: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the final grid is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where the table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Fresh table of the given shape
    New {
        rows: usize,
        cols: usize,
        headers: bool,
    },
    Csv {
        path: PathBuf,
        headers: bool,
    },
    Json(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source: TableSource,
    pub selection: Option<Coordinates>,
    pub keys: Vec<String>,
    pub insert: Option<String>,
    pub format: OutputFormat,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration, filling
    /// unspecified values from the user config
    pub fn into_config(self, config: &GridConfig) -> Result<StartupConfig, String> {
        let headers = config.headers && !self.no_headers;

        let source = if let Some(path) = self.csv {
            TableSource::Csv { path, headers }
        } else if let Some(path) = self.table {
            TableSource::Json(path)
        } else {
            let rows = self.rows.unwrap_or(config.rows);
            let cols = self.cols.unwrap_or(config.cols);
            if rows == 0 || cols == 0 {
                return Err("Table needs at least one row and one column".to_string());
            }
            TableSource::New {
                rows,
                cols,
                headers,
            }
        };

        let selection = self.select.as_deref().map(parse_coords).transpose()?;

        let keys = self
            .keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        Ok(StartupConfig {
            source,
            selection,
            keys,
            insert: self.insert,
            format: self.format,
        })
    }
}

/// Parse `X,Y` into coordinates
pub fn parse_coords(s: &str) -> Result<Coordinates, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("Expected X,Y but got '{}'", s))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Invalid column '{}': {}", x.trim(), e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Invalid row '{}': {}", y.trim(), e))?;
    Ok(Coordinates::new(x, y))
}
