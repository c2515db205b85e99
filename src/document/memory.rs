//! In-memory host document

use super::host::{GridHost, Node};
use super::path::DocPath;
use crate::error::{GridError, Result, StructureError};
use crate::table::Table;
use crate::validation::{check_cell_edit, EditCheck, TextOperation, ValidatorRegistry};

/// Result of pushing a text edit through the commit pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The cell text was updated
    Applied,
    /// The validator refused the resulting text; nothing changed
    Rejected,
    /// The target cell carries no text
    NotEditable,
}

/// A self-contained document holding one table, a focus and validators
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    focus: Option<DocPath>,
    validators: ValidatorRegistry,
}

impl Document {
    /// Document whose root holds `table`, with the built-in validators
    pub fn new(table: Table) -> Self {
        Self::from_nodes(vec![Node::Table(table)])
    }

    /// Document with arbitrary root nodes (used to model malformed documents)
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            focus: None,
            validators: ValidatorRegistry::with_builtins(),
        }
    }

    pub fn with_validators(mut self, validators: ValidatorRegistry) -> Self {
        self.validators = validators;
        self
    }

    pub fn validators_mut(&mut self) -> &mut ValidatorRegistry {
        &mut self.validators
    }

    /// Drop the focus (selection becomes empty)
    pub fn blur(&mut self) {
        if self.focus.take().is_some() {
            tracing::trace!("document focus cleared");
        }
    }

    /// Mutable access to the root table for structural edits
    pub fn table_mut(&mut self) -> Result<&mut Table> {
        match self.nodes.as_mut_slice() {
            [] => Err(StructureError::MissingRoot.into()),
            [Node::Table(table)] => {
                table.check_shape()?;
                Ok(table)
            }
            [_] => Err(StructureError::NotATable.into()),
            nodes => Err(StructureError::RootCount(nodes.len()).into()),
        }
    }

    /// Commit pipeline for in-cell text edits.
    ///
    /// The edit is validated against the target cell's validator before it
    /// is applied; a rejected edit leaves the document untouched.
    pub fn apply_text_operation(
        &mut self,
        path: &DocPath,
        op: &TextOperation,
    ) -> Result<EditOutcome> {
        let cell = match self.root_table() {
            Ok(table) => path.cell_index().and_then(|n| table.nth_cell(n)),
            Err(e) => {
                tracing::warn!(%path, "text edit failed: {}", e);
                return Err(e);
            }
        }
        .ok_or_else(|| GridError::InvalidPath(path.clone()))?;

        match check_cell_edit(cell, &self.validators, op) {
            Ok(EditCheck::Allowed) => {}
            Ok(EditCheck::Rejected) => {
                tracing::debug!(%path, ?op, "text edit rejected by validator");
                return Ok(EditOutcome::Rejected);
            }
            Ok(EditCheck::NotEditable) => return Ok(EditOutcome::NotEditable),
            Err(e) => {
                tracing::warn!(%path, "text edit failed: {}", e);
                return Err(e);
            }
        }

        if op.is_noop() {
            return Ok(EditOutcome::Applied);
        }

        let index = path
            .cell_index()
            .ok_or_else(|| GridError::InvalidPath(path.clone()))?;
        if let Some(content) = self
            .table_mut()?
            .nth_cell_mut(index)
            .and_then(|cell| cell.content_mut())
        {
            content.text = op.apply(&content.text);
            tracing::trace!(%path, text = %content.text, "text edit applied");
        }
        Ok(EditOutcome::Applied)
    }
}

impl GridHost for Document {
    fn root(&self) -> &[Node] {
        &self.nodes
    }

    fn focus(&self) -> Option<&DocPath> {
        self.focus.as_ref()
    }

    fn set_focus(&mut self, path: DocPath) {
        self.focus = Some(path);
    }

    fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }
}
