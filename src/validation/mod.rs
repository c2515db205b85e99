//! Pre-commit validation of in-cell text edits
//!
//! An edit is checked by computing the text it *would* produce and handing
//! that to the cell's validator. Nothing here mutates a cell; rejecting or
//! applying the edit is up to the host's commit pipeline.

mod registry;

pub use registry::{ValidationFn, ValidatorRegistry};

use crate::cell::Cell;
use crate::error::{GridError, Result};

/// A prospective text edit inside a single cell (offsets in characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOperation {
    Insert { offset: usize, text: String },
    Remove { offset: usize, length: usize },
}

impl TextOperation {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        TextOperation::Insert {
            offset,
            text: text.into(),
        }
    }

    pub fn remove(offset: usize, length: usize) -> Self {
        TextOperation::Remove { offset, length }
    }

    /// Removal described by the text being removed
    pub fn remove_text(offset: usize, removed: &str) -> Self {
        TextOperation::Remove {
            offset,
            length: removed.chars().count(),
        }
    }

    /// Zero-length inserts and removals change nothing
    pub fn is_noop(&self) -> bool {
        match self {
            TextOperation::Insert { text, .. } => text.is_empty(),
            TextOperation::Remove { length, .. } => *length == 0,
        }
    }

    /// Text that results from applying this operation to `text`.
    /// Offsets past the end clamp to the end.
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextOperation::Insert {
                offset,
                text: inserted,
            } => {
                let at = byte_offset(text, *offset);
                let mut result = String::with_capacity(text.len() + inserted.len());
                result.push_str(&text[..at]);
                result.push_str(inserted);
                result.push_str(&text[at..]);
                result
            }
            TextOperation::Remove { offset, length } => {
                let start = byte_offset(text, *offset);
                let end = byte_offset(text, offset.saturating_add(*length));
                let mut result = String::with_capacity(text.len() - (end - start));
                result.push_str(&text[..start]);
                result.push_str(&text[end..]);
                result
            }
        }
    }
}

/// Byte position of the `char_offset`th character, clamped to the end
fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Return true if the result of applying `op` to `text` satisfies `validator`.
///
/// No-op edits validate without calling the predicate.
pub fn validate_text_edit<F>(text: &str, validator: F, op: &TextOperation) -> bool
where
    F: Fn(&str) -> bool,
{
    if op.is_noop() {
        return true;
    }
    validator(&op.apply(text))
}

/// Verdict of checking an edit against a specific cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCheck {
    Allowed,
    Rejected,
    /// The cell has no text to edit (origin and header cells)
    NotEditable,
}

/// Check `op` against `cell` using the validator its payload names.
///
/// Cells without a validator key accept every edit; a key missing from
/// `registry` is an error.
pub fn check_cell_edit(
    cell: &Cell,
    registry: &ValidatorRegistry,
    op: &TextOperation,
) -> Result<EditCheck> {
    let Some(content) = cell.content_ref() else {
        return Ok(EditCheck::NotEditable);
    };
    let allowed = match content.validator.as_deref() {
        None => true,
        Some(key) => {
            let validator = registry
                .get(key)
                .ok_or_else(|| GridError::UnknownValidator(key.to_string()))?;
            validate_text_edit(&content.text, &**validator, op)
        }
    };
    Ok(if allowed {
        EditCheck::Allowed
    } else {
        EditCheck::Rejected
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::TextContent;

    fn is_numeric(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_insert_at_end_valid() {
        assert!(validate_text_edit(
            "123",
            is_numeric,
            &TextOperation::insert(3, "4")
        ));
    }

    #[test]
    fn test_insert_at_start_invalid() {
        assert!(!validate_text_edit(
            "123",
            is_numeric,
            &TextOperation::insert(0, "x")
        ));
    }

    #[test]
    fn test_remove_everything_leaves_valid_empty_text() {
        // Empty text counts as numeric
        assert!(validate_text_edit(
            "123",
            is_numeric,
            &TextOperation::remove(0, 3)
        ));
    }

    #[test]
    fn test_noop_skips_predicate() {
        let never = |_: &str| -> bool { panic!("predicate must not run") };
        assert!(validate_text_edit("abc", never, &TextOperation::insert(1, "")));
        assert!(validate_text_edit("abc", never, &TextOperation::remove(1, 0)));
    }

    #[test]
    fn test_predicate_sees_spliced_text() {
        let seen = std::cell::RefCell::new(Vec::new());
        let record = |s: &str| {
            seen.borrow_mut().push(s.to_string());
            true
        };
        validate_text_edit("hello", record, &TextOperation::insert(2, "XY"));
        validate_text_edit("hello", record, &TextOperation::remove(1, 3));
        assert_eq!(*seen.borrow(), vec!["heXYllo", "ho"]);
    }

    #[test]
    fn test_apply_clamps_offsets() {
        assert_eq!(TextOperation::insert(99, "!").apply("hi"), "hi!");
        assert_eq!(TextOperation::remove(1, 99).apply("hello"), "h");
        assert_eq!(TextOperation::remove(10, 2).apply("hello"), "hello");
    }

    #[test]
    fn test_apply_counts_characters() {
        assert_eq!(TextOperation::insert(1, "ö").apply("åb"), "åöb");
        assert_eq!(TextOperation::remove_text(0, "å").apply("åb"), "b");
    }

    #[test]
    fn test_check_cell_edit() {
        let registry = ValidatorRegistry::with_builtins();
        let cell = Cell::numeric(12);

        assert_eq!(
            check_cell_edit(&cell, &registry, &TextOperation::insert(2, "3")).unwrap(),
            EditCheck::Allowed
        );
        assert_eq!(
            check_cell_edit(&cell, &registry, &TextOperation::insert(0, "a")).unwrap(),
            EditCheck::Rejected
        );
        assert_eq!(
            check_cell_edit(&Cell::row_header(), &registry, &TextOperation::insert(0, "a"))
                .unwrap(),
            EditCheck::NotEditable
        );
    }

    #[test]
    fn test_check_cell_edit_unrestricted_and_unknown() {
        let registry = ValidatorRegistry::with_builtins();
        assert_eq!(
            check_cell_edit(
                &Cell::content("x"),
                &registry,
                &TextOperation::insert(0, "anything")
            )
            .unwrap(),
            EditCheck::Allowed
        );

        let cell = Cell::custom("date", TextContent::with_validator("", "iso-date"));
        assert_eq!(
            check_cell_edit(&cell, &registry, &TextOperation::insert(0, "1")).unwrap_err(),
            GridError::UnknownValidator("iso-date".to_string())
        );
    }
}
