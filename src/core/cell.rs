// src/core/cell.rs

use super::complex::{Amplitude, ONE, ZERO};
use super::constants::engine_constants::NORM_EPSILON;
use std::fmt;

/// One site of the automaton: amplitudes on the `|dead⟩` and `|alive⟩` basis.
///
/// Every cell the crate hands back satisfies `|α|² + |β|² = 1` within
/// tolerance. Unnormalized cells only exist transiently inside a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Amplitude of `|dead⟩`.
    pub alpha: Amplitude,
    /// Amplitude of `|alive⟩`.
    pub beta: Amplitude,
}

impl Cell {
    /// The classical dead state `(1, 0)`.
    pub const DEAD: Cell = Cell { alpha: ONE, beta: ZERO };
    /// The classical alive state `(0, 1)`.
    pub const ALIVE: Cell = Cell { alpha: ZERO, beta: ONE };

    /// Builds a cell from raw amplitudes without normalizing.
    pub fn new(alpha: Amplitude, beta: Amplitude) -> Self {
        Self { alpha, beta }
    }

    /// Classical state for a boolean liveness.
    pub fn classical(alive: bool) -> Self {
        if alive { Self::ALIVE } else { Self::DEAD }
    }

    /// `|β|²`
    #[inline]
    pub fn alive_probability(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// `|α|²`
    #[inline]
    pub fn dead_probability(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// `sqrt(|α|² + |β|²)`, computed without intermediate overflow.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.alpha.norm().hypot(self.beta.norm())
    }

    /// Scales both amplitudes to unit norm.
    ///
    /// A norm at or below `1e-9`, or one that is not finite, cannot be
    /// rescaled meaningfully; such cells fall back to [`Cell::DEAD`].
    pub fn normalized(self) -> Self {
        let norm = self.norm();
        if norm.is_finite() && norm > NORM_EPSILON {
            Self { alpha: self.alpha / norm, beta: self.beta / norm }
        } else {
            Self::DEAD
        }
    }

    /// True when the cell is exactly one of the two classical states.
    pub fn is_classical(&self) -> bool {
        *self == Self::DEAD || *self == Self::ALIVE
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::DEAD
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell[α={:.4}, β={:.4}, P(alive)={:.4}]", self.alpha, self.beta, self.alive_probability())
    }
}
