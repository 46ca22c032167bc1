//! Error types for grid operations

use thiserror::Error;

/// Errors raised by the table store and controller
///
/// `OutOfRange` is unreachable through the navigation state machine (every
/// coordinate it produces is clamped); seeing one means an invariant broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} table")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
}
