// src/validation/mod.rs

//! Checks of the per-cell normalization invariant `|α|² + |β|² = 1`.

use crate::core::constants::engine_constants::NORM_TOLERANCE;
use crate::core::{Cell, Grid, LifeError};

/// Checks that a single cell is normalized.
///
/// # Arguments
/// * `cell` - The cell to check.
/// * `tolerance` - Allowed deviation of `|α|² + |β|²` from 1.0. Defaults to `1e-9`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(LifeError::Incoherence)` otherwise.
pub fn check_cell_normalization(cell: &Cell, tolerance: Option<f64>) -> Result<(), LifeError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = cell.alpha.norm_sqr() + cell.beta.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance || !norm_sq.is_finite() {
        Err(LifeError::Incoherence {
            message: format!("|α|²+|β|² = {} (deviation > {})", norm_sq, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Checks every cell of `grid`, reporting the first offender by position.
pub fn check_grid_normalization(grid: &Grid, tolerance: Option<f64>) -> Result<(), LifeError> {
    for (row, col, cell) in grid.iter() {
        check_cell_normalization(cell, tolerance).map_err(|e| match e {
            LifeError::Incoherence { message } => LifeError::Incoherence {
                message: format!("cell ({}, {}): {}", row, col, message),
            },
            other => other,
        })?;
    }
    Ok(())
}

/// Largest `||α|² + |β|² - 1|` over the grid. A NaN cell counts as infinite deviation.
pub fn max_norm_deviation(grid: &Grid) -> f64 {
    grid.cells()
        .iter()
        .map(|c| (c.alpha.norm_sqr() + c.beta.norm_sqr() - 1.0).abs())
        .map(|d| if d.is_nan() { f64::INFINITY } else { d })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn classical_cells_pass() {
        assert!(check_cell_normalization(&Cell::DEAD, None).is_ok());
        assert!(check_cell_normalization(&Cell::ALIVE, Some(0.0)).is_ok());
    }

    #[test]
    fn grid_check_names_offending_cell() {
        let mut grid = Grid::empty(3);
        grid.set(2, 1, Cell::new(Complex::new(1.0, 0.0), Complex::new(1.0, 0.0))).unwrap();
        match check_grid_normalization(&grid, None) {
            Err(LifeError::Incoherence { message }) => assert!(message.starts_with("cell (2, 1)")),
            other => panic!("expected incoherence, got {:?}", other),
        }
        assert!((max_norm_deviation(&grid) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn nan_cell_is_maximally_deviant() {
        let mut grid = Grid::empty(2);
        grid.set(0, 0, Cell::new(Complex::new(f64::NAN, 0.0), Complex::new(0.0, 0.0))).unwrap();
        assert_eq!(max_norm_deviation(&grid), f64::INFINITY);
        assert!(check_grid_normalization(&grid, None).is_err());
    }
}
