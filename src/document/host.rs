//! Capability interface between the grid engine and its host

use serde::{Deserialize, Serialize};

use super::path::DocPath;
use crate::cell::Cell;
use crate::error::{Result, StructureError};
use crate::table::Table;
use crate::validation::ValidatorRegistry;

/// Top-level node of a host document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Table(Table),
    /// Any node that is not a grid (e.g. a free-standing paragraph)
    Block { text: String },
}

impl Node {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(table) => Some(table),
            Node::Block { .. } => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Node::Table(table) => Some(table),
            Node::Block { .. } => None,
        }
    }
}

/// Operations the grid engine needs from the document-editing substrate.
///
/// Hosts own the document, the focus and the edit pipeline; the engine only
/// reads nodes, reads the focus and requests focus changes.
pub trait GridHost {
    /// Root-level nodes of the document
    fn root(&self) -> &[Node];

    /// Path of the current focus, if anything is focused
    fn focus(&self) -> Option<&DocPath>;

    /// Move the focus to `path`
    fn set_focus(&mut self, path: DocPath);

    /// Validators available to cells of this document
    fn validators(&self) -> &ValidatorRegistry;

    /// The document's single root table.
    ///
    /// Fails when the root is empty, holds anything besides one table, or
    /// the table's cell count disagrees with its shape.
    fn root_table(&self) -> Result<&Table> {
        let table = match self.root() {
            [] => return Err(StructureError::MissingRoot.into()),
            [Node::Table(table)] => table,
            [_] => return Err(StructureError::NotATable.into()),
            nodes => return Err(StructureError::RootCount(nodes.len()).into()),
        };
        table.check_shape()?;
        Ok(table)
    }

    /// Path-addressed read of a root table cell; deeper paths resolve to
    /// the cell that contains them. None on a malformed root.
    fn cell_at_path(&self, path: &DocPath) -> Option<&Cell> {
        self.root_table().ok()?.nth_cell(path.cell_index()?)
    }
}

impl<H: GridHost + ?Sized> GridHost for &mut H {
    fn root(&self) -> &[Node] {
        (**self).root()
    }

    fn focus(&self) -> Option<&DocPath> {
        (**self).focus()
    }

    fn set_focus(&mut self, path: DocPath) {
        (**self).set_focus(path)
    }

    fn validators(&self) -> &ValidatorRegistry {
        (**self).validators()
    }

    fn cell_at_path(&self, path: &DocPath) -> Option<&Cell> {
        (**self).cell_at_path(path)
    }
}
