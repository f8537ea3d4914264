//! Construction errors.

use thiserror::Error;

use super::cell::Cell;

/// Errors raised while building a board or validating its configuration.
///
/// Moves never fail; these only come from constructors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoardError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("layout row {row} has {len} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, which is neither empty, blocked, nor a power of two")]
    InvalidCell { row: usize, col: usize, value: Cell },

    #[error("four-tile probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}
