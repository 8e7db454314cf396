// src/core/grid.rs

use super::cell::Cell;
use super::complex::from_polar;
use super::error::LifeError;
use super::random;
use rand::Rng;
use std::f64::consts::{FRAC_1_SQRT_2, TAU};
use std::fmt;
use std::ops::Index;

/// How neighbor lookups treat the grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Edges wrap around.
    #[default]
    Toroidal,
    /// Cells past the edge do not exist and contribute nothing.
    Bounded,
}

/// Category split used by [`Grid::random`].
///
/// A uniform draw below `alive_probability` seeds a fully alive cell, the next
/// `superposition_probability` band seeds an equal superposition with a random
/// relative phase, and the remainder stays dead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedDensities {
    /// Share of fully alive cells.
    pub alive_probability: f64,
    /// Share of superposed cells.
    pub superposition_probability: f64,
}

impl Default for SeedDensities {
    fn default() -> Self {
        Self { alive_probability: 0.2, superposition_probability: 0.3 }
    }
}

/// Offsets of the Moore neighborhood, row-major, center excluded.
static NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Square row-major grid of [`Cell`]s with a size fixed for its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All cells `|dead⟩`.
    pub fn empty(size: usize) -> Self {
        Self { size, cells: vec![Cell::DEAD; size * size] }
    }

    /// Random population drawn with one uniform sample per cell (plus one for
    /// the phase of superposed cells).
    pub fn random<R: Rng + ?Sized>(size: usize, densities: SeedDensities, rng: &mut R) -> Self {
        let alive_cut = densities.alive_probability;
        let superposition_cut = alive_cut + densities.superposition_probability;
        let cells = (0..size * size)
            .map(|_| {
                let draw = random::unit(rng);
                if draw < alive_cut {
                    Cell::ALIVE
                } else if draw < superposition_cut {
                    let phase = random::unit(rng) * TAU;
                    Cell::new(from_polar(FRAC_1_SQRT_2, 0.0), from_polar(FRAC_1_SQRT_2, phase)).normalized()
                } else {
                    Cell::DEAD
                }
            })
            .collect();
        Self { size, cells }
    }

    /// Wraps an explicit row-major cell vector.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, LifeError> {
        if cells.len() != size * size {
            return Err(LifeError::InvalidOperation {
                message: format!("expected {} cells for a {}x{} grid, got {}", size * size, size, size, cells.len()),
            });
        }
        Ok(Self { size, cells })
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Cell at `(row, col)`, if inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Replaces the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), LifeError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.size + col] = cell;
        Ok(())
    }

    pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<(), LifeError> {
        if row < self.size && col < self.size {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds { row, col, size: self.size })
        }
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(k, cell)| (k / size, k % size, cell))
    }

    /// Applies `f` to every cell, producing a new grid of the same size.
    pub fn map<F: FnMut(&Cell) -> Cell>(&self, f: F) -> Grid {
        Grid { size: self.size, cells: self.cells.iter().map(f).collect() }
    }

    /// The up-to-eight Moore neighbors of `(row, col)` under `boundary`.
    ///
    /// Toroidal lookups always yield eight cells (on tiny grids some of them
    /// are the same cell, or the center itself); bounded lookups skip cells
    /// past the edge.
    pub fn neighbors(&self, row: usize, col: usize, boundary: Boundary) -> impl Iterator<Item = &Cell> + '_ {
        neighbor_coords(self.size, row, col, boundary).map(move |(r, c)| &self.cells[r * self.size + c])
    }

    /// Sum of `|β|²` over all cells.
    pub fn expected_population(&self) -> f64 {
        self.cells.iter().map(Cell::alive_probability).sum()
    }
}

/// Coordinates of the Moore neighbors of `(row, col)` on a `size`×`size` grid.
pub(crate) fn neighbor_coords(
    size: usize,
    row: usize,
    col: usize,
    boundary: Boundary,
) -> impl Iterator<Item = (usize, usize)> {
    let n = size as isize;
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let (r, c) = (row as isize + dr, col as isize + dc);
        match boundary {
            Boundary::Toroidal => Some((r.rem_euclid(n) as usize, c.rem_euclid(n) as usize)),
            Boundary::Bounded if r >= 0 && r < n && c >= 0 && c < n => Some((r as usize, c as usize)),
            Boundary::Bounded => None,
        }
    })
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(row < self.size && col < self.size, "cell ({}, {}) outside {}x{} grid", row, col, self.size, self.size);
        &self.cells[row * self.size + col]
    }
}

impl fmt::Display for Grid {
    /// Renders alive-probability as a coarse character ramp, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RAMP: [char; 5] = ['.', ':', '+', '#', '@'];
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let level = (cell.alive_probability() * (RAMP.len() - 1) as f64).round() as usize;
                write!(f, "{}", RAMP[level.min(RAMP.len() - 1)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
