//! Grid cells
//!
//! A cell is a leaf of the document positioned inside the root table. It
//! carries an identity and a typed payload, but never its own coordinates:
//! those are always derived from the cell's index in the owning table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CELL_ID: AtomicU64 = AtomicU64::new(1);

/// Session-unique identifier for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u64);

impl CellId {
    /// Allocate a fresh identifier
    pub fn next() -> Self {
        CellId(NEXT_CELL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Type tag of a cell, used for narrowing lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Top-left corner of a spreadsheet layout
    Origin,
    RowHeader,
    ColumnHeader,
    /// Default editable text cell
    Content,
    /// Content type registered by the embedding application
    Custom(String),
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Origin => write!(f, "origin"),
            CellType::RowHeader => write!(f, "row-header"),
            CellType::ColumnHeader => write!(f, "column-header"),
            CellType::Content => write!(f, "content"),
            CellType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Editable text payload of a content cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    /// Registry key of the validator gating edits (None = unrestricted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            validator: None,
        }
    }

    pub fn with_validator(text: impl Into<String>, validator: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            validator: Some(validator.into()),
        }
    }
}

/// Typed payload of a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cellType", rename_all = "camelCase")]
pub enum CellKind {
    Origin,
    RowHeader,
    ColumnHeader,
    Content(TextContent),
    Custom {
        #[serde(rename = "typeName")]
        type_name: String,
        content: TextContent,
    },
}

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(skip, default = "CellId::next")]
    id: CellId,
    #[serde(flatten)]
    pub kind: CellKind,
}

impl Cell {
    pub fn new(kind: CellKind) -> Self {
        Self {
            id: CellId::next(),
            kind,
        }
    }

    pub fn origin() -> Self {
        Self::new(CellKind::Origin)
    }

    pub fn row_header() -> Self {
        Self::new(CellKind::RowHeader)
    }

    pub fn column_header() -> Self {
        Self::new(CellKind::ColumnHeader)
    }

    /// Unrestricted text cell
    pub fn content(text: impl Into<String>) -> Self {
        Self::new(CellKind::Content(TextContent::new(text)))
    }

    /// Default content cell: holds `num` and only accepts numeric text
    pub fn numeric(num: u64) -> Self {
        Self::new(CellKind::Content(TextContent::with_validator(
            num.to_string(),
            "numeric",
        )))
    }

    pub fn custom(type_name: impl Into<String>, content: TextContent) -> Self {
        Self::new(CellKind::Custom {
            type_name: type_name.into(),
            content,
        })
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn cell_type(&self) -> CellType {
        match &self.kind {
            CellKind::Origin => CellType::Origin,
            CellKind::RowHeader => CellType::RowHeader,
            CellKind::ColumnHeader => CellType::ColumnHeader,
            CellKind::Content(_) => CellType::Content,
            CellKind::Custom { type_name, .. } => CellType::Custom(type_name.clone()),
        }
    }

    /// True iff this cell's type tag equals `cell_type`
    pub fn is_cell_type(&self, cell_type: &CellType) -> bool {
        match (&self.kind, cell_type) {
            (CellKind::Origin, CellType::Origin)
            | (CellKind::RowHeader, CellType::RowHeader)
            | (CellKind::ColumnHeader, CellType::ColumnHeader)
            | (CellKind::Content(_), CellType::Content) => true,
            (CellKind::Custom { type_name, .. }, CellType::Custom(name)) => type_name == name,
            _ => false,
        }
    }

    /// Text payload, for content and custom cells
    pub fn content_ref(&self) -> Option<&TextContent> {
        match &self.kind {
            CellKind::Content(content) | CellKind::Custom { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut TextContent> {
        match &mut self.kind {
            CellKind::Content(content) | CellKind::Custom { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.content_ref().map(|c| c.text.as_str())
    }

    pub fn validator(&self) -> Option<&str> {
        self.content_ref().and_then(|c| c.validator.as_deref())
    }
}

/// Spreadsheet column letters for a zero-based data column
/// (0 → "A", 25 → "Z", 26 → "AA", 52 → "BA")
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Row header label; rows are numbered by their table row
pub fn row_label(row: usize) -> String {
    row.to_string()
}
