//! Tree paths into the host document

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of the table among the document's root nodes
pub const TABLE_INDEX: usize = 0;

/// Hierarchical address of a document node
///
/// The root table is `[0]`, its `n`th cell is `[0, n]` and text inside
/// that cell is `[0, n, 0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocPath(Vec<usize>);

impl DocPath {
    pub fn new(segments: Vec<usize>) -> Self {
        Self(segments)
    }

    /// Path to the `n`th cell of the root table
    pub fn cell(n: usize) -> Self {
        Self(vec![TABLE_INDEX, n])
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Linear cell index if this path points at (or into) a root table cell
    pub fn cell_index(&self) -> Option<usize> {
        match self.0.as_slice() {
            [TABLE_INDEX, n, ..] => Some(*n),
            _ => None,
        }
    }

    /// Child path one level deeper
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }
}

impl From<Vec<usize>> for DocPath {
    fn from(segments: Vec<usize>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", segment)?;
        }
        write!(f, "]")
    }
}
