// src/simulation/ripple.rs

//! Traveling phase-shift wavefront started by collapsing one cell.
//!
//! The front is an annulus centered on the collapsed cell whose radius grows
//! linearly with elapsed (animation) time. On each tick every cell within half
//! a wave width of the front gets its `β` rotated by
//! `A(r)·cos(π/2 · Δ/(w/2)) + s·θ`, where `A(r) = A₀·e^(-k·r)`, `Δ` is the
//! cell's signed distance from the front, `θ` its polar angle around the
//! origin and `s` the spiral factor; the cell is then renormalized.
//!
//! Ticks are cumulative: a cell inside the band on several ticks is rotated
//! once per tick. Distances are Euclidean on the plane regardless of boundary
//! mode.

use crate::core::complex::phase;
use crate::core::constants::ripple_constants::{
    DECAY_RATE, INITIAL_AMPLITUDE, MAX_RADIUS_FACTOR, SPIRAL_FACTOR, WAVE_SPEED, WAVE_WIDTH,
};
use crate::core::{Cell, Grid, LifeError};
use std::f64::consts::FRAC_PI_2;

/// Shape of the wavefront.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RippleParams {
    /// Radial speed, grid units per second.
    pub wave_speed: f64,
    /// Annulus width, grid units.
    pub wave_width: f64,
    /// Peak phase shift at radius 0.
    pub initial_amplitude: f64,
    /// Exponential amplitude decay per grid unit.
    pub decay_rate: f64,
    /// Weight of the polar angle.
    pub spiral_factor: f64,
    /// Radius, as a multiple of grid size, at which the ripple ends.
    pub max_radius_factor: f64,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            wave_speed: WAVE_SPEED,
            wave_width: WAVE_WIDTH,
            initial_amplitude: INITIAL_AMPLITUDE,
            decay_rate: DECAY_RATE,
            spiral_factor: SPIRAL_FACTOR,
            max_radius_factor: MAX_RADIUS_FACTOR,
        }
    }
}

/// Outcome of one ripple tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleProgress {
    /// Front radius used for this tick.
    pub radius: f64,
    /// Cells rotated on this tick.
    pub cells_touched: usize,
    /// No further ticks will change the grid.
    pub done: bool,
}

/// Handle of an in-flight ripple.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    row: usize,
    col: usize,
    max_radius: f64,
    params: RippleParams,
    done: bool,
}

impl Ripple {
    /// Collapses `(row, col)` of `grid` to `|dead⟩` and starts a ripple there.
    pub fn trigger(grid: &mut Grid, row: usize, col: usize) -> Result<Self, LifeError> {
        Self::trigger_with(grid, row, col, RippleParams::default())
    }

    /// [`Ripple::trigger`] with a custom wave shape.
    pub fn trigger_with(grid: &mut Grid, row: usize, col: usize, params: RippleParams) -> Result<Self, LifeError> {
        grid.set(row, col, Cell::DEAD)?;
        log::info!("ripple triggered at ({}, {})", row, col);
        Ok(Self {
            row,
            col,
            max_radius: grid.size() as f64 * params.max_radius_factor,
            params,
            done: false,
        })
    }

    /// Origin cell `(row, col)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Radius at which the ripple ends.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Whether the ripple has finished.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Front radius after `elapsed_seconds` since the trigger.
    pub fn radius_at(&self, elapsed_seconds: f64) -> f64 {
        elapsed_seconds.max(0.0) * self.params.wave_speed
    }

    /// Phase shift applied to a cell at `distance` from the origin and polar
    /// angle `angle`, for a front at `radius`. `None` outside the band.
    pub fn phase_shift(&self, radius: f64, distance: f64, angle: f64) -> Option<f64> {
        let half_width = self.params.wave_width / 2.0;
        let offset = distance - radius;
        if offset.abs() >= half_width {
            return None;
        }
        let amplitude = self.params.initial_amplitude * (-self.params.decay_rate * radius).exp();
        let profile = (offset / half_width * FRAC_PI_2).cos();
        Some(amplitude * profile + self.params.spiral_factor * angle)
    }

    /// Applies one tick at `elapsed_seconds` since the trigger.
    ///
    /// Once finished further calls leave the grid untouched.
    pub fn advance(&mut self, grid: &mut Grid, elapsed_seconds: f64) -> RippleProgress {
        let radius = self.radius_at(elapsed_seconds);
        if self.done {
            return RippleProgress { radius, cells_touched: 0, done: true };
        }

        let (row0, col0) = (self.row as f64, self.col as f64);
        let size = grid.size();
        let mut cells_touched = 0;
        for (k, cell) in grid.cells_mut().iter_mut().enumerate() {
            let dy = (k / size) as f64 - row0;
            let dx = (k % size) as f64 - col0;
            let distance = (dy * dy + dx * dx).sqrt();
            if let Some(shift) = self.phase_shift(radius, distance, dy.atan2(dx)) {
                *cell = Cell { alpha: cell.alpha, beta: cell.beta * phase(shift) }.normalized();
                cells_touched += 1;
            }
        }

        if radius >= self.max_radius {
            self.done = true;
            log::info!("ripple from ({}, {}) left the grid at radius {:.1}", self.row, self.col, radius);
        }
        RippleProgress { radius, cells_touched, done: self.done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeedDensities;
    use crate::validation::max_norm_deviation;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn trigger_kills_target_and_rejects_outside() {
        let mut grid = Grid::empty(4);
        grid.set(1, 2, Cell::ALIVE).unwrap();
        let ripple = Ripple::trigger(&mut grid, 1, 2).unwrap();
        assert_eq!(grid[(1, 2)], Cell::DEAD);
        assert_eq!(ripple.origin(), (1, 2));
        assert!((ripple.max_radius() - 6.0).abs() < 1e-12);
        assert!(matches!(Ripple::trigger(&mut grid, 4, 0), Err(LifeError::OutOfBounds { .. })));
    }

    #[test]
    fn band_profile_peaks_on_the_front() {
        let mut grid = Grid::empty(3);
        let ripple = Ripple::trigger(&mut grid, 0, 0).unwrap();
        let on_front = ripple.phase_shift(0.0, 0.0, 0.0).unwrap();
        assert!((on_front - INITIAL_AMPLITUDE).abs() < 1e-12);
        assert!(ripple.phase_shift(5.0, 7.0, 0.0).is_none());
        assert!(ripple.phase_shift(5.0, 3.0, 0.0).is_none());
        assert!(ripple.phase_shift(5.0, 6.9, 0.0).is_some());
    }

    #[test]
    fn ticks_keep_cells_normalized_and_finish() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut grid = Grid::random(10, SeedDensities::default(), &mut rng);
        let mut ripple = Ripple::trigger(&mut grid, 5, 5).unwrap();
        let mut elapsed = 0.0;
        let mut last = None;
        while !ripple.is_done() {
            elapsed += 1.0 / 60.0;
            last = Some(ripple.advance(&mut grid, elapsed));
            assert!(max_norm_deviation(&grid) < 1e-9);
        }
        let last = last.unwrap();
        assert!(last.done);
        assert!(last.radius >= 15.0);
        let frozen = grid.clone();
        ripple.advance(&mut grid, elapsed + 1.0);
        assert_eq!(grid, frozen);
    }
}
