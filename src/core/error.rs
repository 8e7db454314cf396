//! Error handling logic

use thiserror::Error;

/// Failures surfaced by the automaton.
///
/// Numeric degeneracies (zero-norm cells) are recovered locally and never
/// reach this type; these variants cover rejected input only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A configuration value was rejected; the previous configuration stays in effect.
    #[error("Invalid Configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the value
        message: String,
    },

    /// A cell coordinate lies outside the grid.
    #[error("Out of Bounds: cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Edge length of the grid
        size: usize,
    },

    /// Pattern data is not a rectangular 0/1 matrix.
    #[error("Invalid Pattern: {message}")]
    InvalidPattern {
        /// InvalidPattern failure message
        message: String,
    },

    /// The operation is not allowed in the current state.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// A cell violates the normalization invariant.
    #[error("Incoherence Violation: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },
}
