//! Selection errors.

/// Errors that can occur while reading a selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Selection out of range: sublines {start}..={end} requested, {len} available")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("No selection")]
    NoSelection,
}
