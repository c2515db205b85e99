//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection movement and edit validation.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cellgrid::grid=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/cellgrid/logs/cellgrid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::coordinates::Coordinates;
use crate::document::GridHost;
use crate::grid::GridEditor;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/cellgrid/logs/cellgrid.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stderr keeps stdout for output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub selected: Option<Coordinates>,
    pub rows: usize,
    pub cols: usize,
}

impl SelectionSnapshot {
    /// Capture the current selection; a malformed document reads as unselected 0x0
    pub fn capture<H: GridHost>(editor: &GridEditor<H>) -> Self {
        let (rows, cols) = editor
            .table()
            .map(|t| (t.rows(), t.cols()))
            .unwrap_or((0, 0));
        Self {
            selected: editor.selected_coords().ok().flatten(),
            rows,
            cols,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.rows, self.cols) != (other.rows, other.cols) {
            changes.push(format!(
                "shape: {}x{} → {}x{}",
                self.rows, self.cols, other.rows, other.cols
            ));
        }

        match (self.selected, other.selected) {
            (Some(before), Some(after)) if before != after => {
                changes.push(format!("selection: {} → {}", before, after));
            }
            (None, Some(after)) => changes.push(format!("selection: none → {}", after)),
            (Some(before), None) => changes.push(format!("selection: {} → none", before)),
            _ => {}
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
