//! Error types for building circuits from raw input.
//!
//! Only malformed input is an error. Cells that never connect or never
//! resolve are ordinary data states, see [`crate::CellState`].

use thiserror::Error;

/// Validation failures raised before any grid is generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// Rule table has the wrong length or contains a symbol outside `[0, COLOR)`.
    #[error("Invalid rule table: {reason}")]
    InvalidRuleTable { reason: String },

    /// Seed or generated row does not match the grid size, or holds a bad symbol.
    #[error("Invalid row: expected {expected} symbols in [0, 4), got {actual}")]
    InvalidRow { expected: usize, actual: String },

    /// Tap arrays do not cover exactly one grid row.
    #[error("Invalid taps: expected {expected} columns, got {actual}")]
    InvalidTaps { expected: usize, actual: usize },

    /// Grids must have at least one row and one column.
    #[error("Invalid grid size: {0}")]
    InvalidGridSize(usize),
}

impl CircuitError {
    /// Creates a rule table error.
    #[must_use]
    pub fn rule_table<S: Into<String>>(reason: S) -> Self {
        Self::InvalidRuleTable {
            reason: reason.into(),
        }
    }

    /// Creates a row error with a free-form description of what was received.
    #[must_use]
    pub fn row<S: Into<String>>(expected: usize, actual: S) -> Self {
        Self::InvalidRow {
            expected,
            actual: actual.into(),
        }
    }
}

/// Result type alias for circuit construction.
pub type Result<T> = std::result::Result<T, CircuitError>;
