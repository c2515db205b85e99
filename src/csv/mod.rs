//! CSV import
//!
//! Loads CSV/TSV/PSV text into a rectangular [`Table`](crate::table::Table).
//! Ragged rows are padded with empty content cells so the table keeps its
//! `rows * cols` shape. Optionally the data is framed spreadsheet-style:
//!
//! ```text
//!  origin │ A      │ B
//! ────────┼────────┼──────
//!  1      │ a      │ b
//!  2      │ 1      │ 2
//! ```

mod parser;

pub use parser::{detect_delimiter, parse_table, Delimiter, ParseError};
