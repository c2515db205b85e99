use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use cellgrid::cli::{CliArgs, OutputFormat, StartupConfig, TableSource};
use cellgrid::csv::{detect_delimiter, parse_table, Delimiter};
use cellgrid::render::render_text;
use cellgrid::tracing::SelectionSnapshot;
use cellgrid::{
    Cell, Document, EditOutcome, GridConfig, GridEditor, NavigationKeys, Table, TextOperation,
};

fn main() -> Result<()> {
    cellgrid::tracing::init();

    let args = CliArgs::parse();
    let config = GridConfig::load();
    let startup = args.into_config(&config).map_err(anyhow::Error::msg)?;

    let table = load_table(&startup.source)?;
    let mut editor = GridEditor::new(Document::new(table));

    run(&mut editor, &startup, &NavigationKeys::from_config(&config))?;

    let output = match startup.format {
        OutputFormat::Text => render_text(&editor)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(editor.table()?)
                .context("Failed to serialize table")?;
            json.push('\n');
            json
        }
    };
    print!("{}", output);
    Ok(())
}

fn load_table(source: &TableSource) -> Result<Table> {
    match source {
        TableSource::New {
            rows,
            cols,
            headers: true,
        } => Ok(Table::spreadsheet(*rows, *cols)?),
        TableSource::New {
            rows,
            cols,
            headers: false,
        } => Ok(Table::new(*rows, *cols, |_| Cell::content(""))?),
        TableSource::Csv { path, headers } => {
            let content = read(path)?;
            let delimiter = match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("csv") => detect_delimiter(&content),
                Some(ext) => Delimiter::from_extension(ext),
                None => detect_delimiter(&content),
            };
            parse_table(&content, delimiter, *headers)
                .with_context(|| format!("Failed to import {}", path.display()))
        }
        TableSource::Json(path) => {
            let content = read(path)?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse table {}", path.display()))
        }
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Apply the requested selection, key moves and insert
fn run(
    editor: &mut GridEditor<Document>,
    startup: &StartupConfig,
    keys: &NavigationKeys,
) -> Result<()> {
    let before = SelectionSnapshot::capture(&*editor);

    if let Some(coords) = startup.selection {
        editor.select_cell(coords)?;
    }
    for key in &startup.keys {
        if !editor.move_selection_by_key(keys, key)? {
            tracing::warn!(key = %key, "key is not bound to a direction");
        }
    }

    if let Some(diff) = before.diff(&SelectionSnapshot::capture(&*editor)) {
        tracing::debug!("{}", diff);
    }

    let Some(text) = &startup.insert else {
        return Ok(());
    };
    let Some(coords) = editor.selected_coords()? else {
        anyhow::bail!("--insert needs a selected cell");
    };
    let Some(path) = editor.path_of_coords(coords)? else {
        anyhow::bail!("selected cell {} is outside the table", coords);
    };
    let end = editor
        .cell_at_coords(coords)?
        .and_then(Cell::text)
        .map(|t| t.chars().count())
        .unwrap_or(0);

    let op = TextOperation::insert(end, text.as_str());
    match editor.host_mut().apply_text_operation(&path, &op)? {
        EditOutcome::Applied => {}
        EditOutcome::Rejected => eprintln!("Edit rejected by the cell's validator"),
        EditOutcome::NotEditable => eprintln!("Cell at {} is not editable", coords),
    }
    Ok(())
}
