// src/operations/mod.rs

//! Whole-grid operators applied between evolution steps.
//!
//! Each operator maps a grid to a fresh grid; none of them schedule anything
//! or keep state. They are invoked by the caller (user-triggered events) and
//! the [`Automaton`](crate::simulation::Automaton) halts its run after the
//! grid-wide ones.

use crate::core::random;
use crate::core::{Cell, Grid, LifeError, Pattern};
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// A user-triggered transformation of the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Hadamard on every cell: `α' = (α+β)/√2`, `β' = (α-β)/√2`.
    Hadamard,
    /// Independent projective measurement of every cell.
    Measure,
    /// Fresh empty grid with `pattern` stamped at the center.
    PlacePattern(Pattern),
    /// Forces one cell to a classical state.
    Collapse {
        /// Target row
        row: usize,
        /// Target column
        col: usize,
        /// Collapse to `|alive⟩` when true, `|dead⟩` otherwise
        alive: bool,
    },
}

impl Operation {
    /// Applies the operation to `grid`, drawing from `rng` where needed.
    pub fn apply<R: Rng + ?Sized>(&self, grid: &Grid, rng: &mut R) -> Result<Grid, LifeError> {
        match self {
            Operation::Hadamard => Ok(apply_hadamard(grid)),
            Operation::Measure => Ok(apply_measurement(grid, rng)),
            Operation::PlacePattern(pattern) => Ok(place_pattern(grid.size(), pattern)),
            Operation::Collapse { row, col, alive } => collapse_cell(grid, *row, *col, *alive),
        }
    }

    /// Whether applying this operation stops a running automaton.
    pub fn halts_run(&self) -> bool {
        !matches!(self, Operation::Collapse { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Hadamard => write!(f, "Hadamard"),
            Operation::Measure => write!(f, "Measure"),
            Operation::PlacePattern(p) => write!(f, "PlacePattern({}x{})", p.rows(), p.cols()),
            Operation::Collapse { row, col, alive } => {
                write!(f, "Collapse({}, {}) -> {}", row, col, if *alive { "alive" } else { "dead" })
            }
        }
    }
}

/// Single synchronous Hadamard over the whole grid.
pub fn apply_hadamard(grid: &Grid) -> Grid {
    grid.map(|cell| Cell {
        alpha: (cell.alpha + cell.beta) * FRAC_1_SQRT_2,
        beta: (cell.alpha - cell.beta) * FRAC_1_SQRT_2,
    })
}

/// Collapses each cell to `|alive⟩` with probability `|β|²`, else `|dead⟩`.
///
/// One uniform draw per cell, in row-major order. Classical cells are fixed
/// points, so measuring twice yields the same grid.
pub fn apply_measurement<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    grid.map(|cell| Cell::classical(random::unit(rng) < cell.alive_probability()))
}

/// Fresh empty grid of `size` with `pattern` centered on it; ones become
/// `|alive⟩`, zeros `|dead⟩`, and anything past the edge is clipped.
pub fn place_pattern(size: usize, pattern: &Pattern) -> Grid {
    let mut grid = Grid::empty(size);
    let cells = grid.cells_mut();
    for (row, col, alive) in pattern.placements(size) {
        cells[row * size + col] = Cell::classical(alive);
    }
    grid
}

/// Copy of `grid` with one cell forced classical.
pub fn collapse_cell(grid: &Grid, row: usize, col: usize, alive: bool) -> Result<Grid, LifeError> {
    let mut next = grid.clone();
    next.set(row, col, Cell::classical(alive))?;
    Ok(next)
}
