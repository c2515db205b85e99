//! Host document substrate
//!
//! The grid engine never owns the document. It talks to whatever editing
//! substrate hosts the table through the [`GridHost`] capability trait:
//! read the root nodes, read and move the focus path, and resolve
//! validators. [`Document`] is an in-memory host used by the binary and
//! the test suite.
//!
//! ```text
//! Document
//! ├── nodes: [Node::Table(Table)]      root holds exactly one table
//! │            └── cells[n]            addressed as DocPath [0, n]
//! ├── focus: Option<DocPath>           derived selection
//! └── validators: ValidatorRegistry
//! ```

mod host;
mod memory;
mod path;

pub use host::{GridHost, Node};
pub use memory::{Document, EditOutcome};
pub use path::DocPath;
