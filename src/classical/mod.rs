// src/classical/mod.rs

//! Classical Conway's Life (B3/S23) on the same square grid shape, boundary
//! handling, patterns and run status as the quantum automaton.

use crate::core::constants::classical_constants::{POPULATION_WINDOW, SEED_DENSITY, STABILITY_MIN_SAMPLES};
use crate::core::grid::neighbor_coords;
use crate::core::{Boundary, LifeError, Pattern, random};
use crate::simulation::config::validate_size;
use crate::simulation::{RingBuffer, RunStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Statistics of the classical automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassicalStats {
    /// Steps since the last reset, clear or placement.
    pub generation: u64,
    /// Number of live cells.
    pub population: usize,
    /// Run state.
    pub status: RunStatus,
}

/// A 0/1 Life grid with run control.
#[derive(Debug, Clone)]
pub struct ClassicalLife<R: Rng = StdRng> {
    size: usize,
    boundary: Boundary,
    cells: Vec<bool>,
    rng: R,
    running: bool,
    stats: ClassicalStats,
    window: RingBuffer<usize>,
}

impl ClassicalLife<StdRng> {
    /// Random `size`×`size` grid from a `StdRng` seeded with `seed`.
    pub fn with_seed(size: usize, boundary: Boundary, seed: u64) -> Result<Self, LifeError> {
        Self::with_rng(size, boundary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ClassicalLife<R> {
    /// Random `size`×`size` grid with 30% live cells drawn from `rng`.
    pub fn with_rng(size: usize, boundary: Boundary, rng: R) -> Result<Self, LifeError> {
        validate_size(size)?;
        let mut life = Self {
            size,
            boundary,
            cells: Vec::new(),
            rng,
            running: false,
            stats: ClassicalStats::default(),
            window: RingBuffer::new(POPULATION_WINDOW),
        };
        life.reset();
        Ok(life)
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edge handling in effect.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Latest statistics.
    pub fn stats(&self) -> &ClassicalStats {
        &self.stats
    }

    /// Whether [`ClassicalLife::tick`] steps.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Liveness of `(row, col)`, `None` outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    /// Row-major liveness of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Changes the edge handling for subsequent steps.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    /// Resizes and reseeds.
    pub fn set_size(&mut self, size: usize) -> Result<(), LifeError> {
        validate_size(size)?;
        self.size = size;
        self.reset();
        Ok(())
    }

    /// Starts stepping on [`ClassicalLife::tick`].
    pub fn run(&mut self) {
        if !self.running {
            self.running = true;
            if !self.stats.status.is_terminal() {
                self.stats.status = RunStatus::Running;
            }
        }
    }

    /// Stops stepping on [`ClassicalLife::tick`].
    pub fn pause(&mut self) {
        if self.running {
            self.halt();
        }
    }

    /// Flips between running and paused.
    pub fn toggle_run(&mut self) {
        if self.running { self.pause() } else { self.run() }
    }

    /// Steps once if running.
    pub fn tick(&mut self) -> Option<ClassicalStats> {
        if self.running { Some(self.step()) } else { None }
    }

    /// Applies B3/S23 once regardless of run state.
    pub fn step(&mut self) -> ClassicalStats {
        let mut next = vec![false; self.cells.len()];
        for (k, slot) in next.iter_mut().enumerate() {
            let (row, col) = (k / self.size, k % self.size);
            let live = neighbor_coords(self.size, row, col, self.boundary)
                .filter(|&(r, c)| self.cells[r * self.size + c])
                .count();
            *slot = matches!((self.cells[k], live), (true, 2) | (_, 3));
        }
        self.cells = next;
        self.stats.generation += 1;
        self.window.push(self.population());
        self.evaluate();
        log::debug!("classical generation {}: population {}", self.stats.generation, self.stats.population);
        self.stats
    }

    /// Fresh random grid at 30% density.
    pub fn reset(&mut self) {
        let rng = &mut self.rng;
        self.cells = (0..self.size * self.size).map(|_| random::unit(rng) < SEED_DENSITY).collect();
        self.restart();
    }

    /// All cells dead.
    pub fn clear(&mut self) {
        self.cells = vec![false; self.size * self.size];
        self.restart();
    }

    /// Empty grid with `pattern` centered on it.
    pub fn place_pattern(&mut self, pattern: &Pattern) {
        self.cells = vec![false; self.size * self.size];
        for (row, col, alive) in pattern.placements(self.size) {
            self.cells[row * self.size + col] = alive;
        }
        self.restart();
    }

    /// Flips one cell. Rejected while running.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        if self.running {
            return Err(LifeError::InvalidOperation { message: "cannot edit cells while running".to_string() });
        }
        if row >= self.size || col >= self.size {
            return Err(LifeError::OutOfBounds { row, col, size: self.size });
        }
        let cell = &mut self.cells[row * self.size + col];
        *cell = !*cell;
        self.evaluate();
        Ok(())
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn halt(&mut self) {
        self.running = false;
        if self.stats.status == RunStatus::Running {
            self.stats.status = RunStatus::Paused;
        }
    }

    fn restart(&mut self) {
        self.running = false;
        self.window.clear();
        self.stats = ClassicalStats::default();
        self.evaluate();
    }

    /// Extinct at zero population; stable once more than five window entries
    /// all equal the current population.
    fn evaluate(&mut self) {
        let population = self.population();
        let settled = self.window.len() > STABILITY_MIN_SAMPLES && self.window.iter().all(|&p| p == population);
        self.stats.population = population;
        self.stats.status = if population == 0 {
            RunStatus::Extinct
        } else if settled {
            RunStatus::Stable
        } else if self.running {
            RunStatus::Running
        } else {
            RunStatus::Paused
        };
        if self.running && self.stats.status.is_terminal() {
            log::info!("classical run halted: {} at generation {}", self.stats.status, self.stats.generation);
            self.halt();
        }
    }
}

impl<R: Rng> fmt::Display for ClassicalLife<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|&c| if c { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_pattern(size: usize, pattern: &Pattern) -> ClassicalLife {
        let mut life = ClassicalLife::with_seed(size, Boundary::Toroidal, 7).unwrap();
        life.place_pattern(pattern);
        life
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut life = with_pattern(5, &Pattern::blinker());
        let start = life.cells().to_vec();
        life.step();
        assert_ne!(life.cells(), start.as_slice());
        assert_eq!(life.stats().population, 3);
        life.step();
        assert_eq!(life.cells(), start.as_slice());
    }

    #[test]
    fn block_run_halts_as_stable() {
        let mut life = with_pattern(6, &Pattern::block());
        life.run();
        let mut steps = 0;
        while life.is_running() && steps < 50 {
            life.tick();
            steps += 1;
        }
        assert_eq!(life.stats().status, RunStatus::Stable);
        assert_eq!(steps, 6);
        assert_eq!(life.stats().population, 4);
    }

    #[test]
    fn cleared_grid_is_extinct() {
        let mut life = ClassicalLife::with_seed(8, Boundary::Bounded, 1).unwrap();
        life.clear();
        assert_eq!(life.stats().status, RunStatus::Extinct);
        assert_eq!(life.stats().generation, 0);
    }

    #[test]
    fn lone_cell_dies() {
        let mut life = ClassicalLife::with_seed(5, Boundary::Bounded, 2).unwrap();
        life.clear();
        life.toggle_cell(2, 2).unwrap();
        assert_eq!(life.stats().status, RunStatus::Paused);
        life.run();
        life.tick();
        assert_eq!(life.stats().status, RunStatus::Extinct);
        assert!(!life.is_running());
    }

    #[test]
    fn edits_are_rejected_while_running() {
        let mut life = ClassicalLife::with_seed(5, Boundary::Toroidal, 3).unwrap();
        life.run();
        assert!(matches!(life.toggle_cell(0, 0), Err(LifeError::InvalidOperation { .. })));
        life.pause();
        assert!(matches!(life.toggle_cell(5, 0), Err(LifeError::OutOfBounds { .. })));
        assert!(life.toggle_cell(0, 0).is_ok());
    }

    #[test]
    fn bounded_edge_has_fewer_neighbors() {
        // A vertical blinker on the top edge: wrapping keeps the far row in
        // play, the bounded grid loses it.
        let mut toroidal = ClassicalLife::with_seed(5, Boundary::Toroidal, 4).unwrap();
        toroidal.clear();
        for r in [4, 0, 1] {
            toroidal.toggle_cell(r, 2).unwrap();
        }
        let mut bounded = toroidal.clone();
        bounded.set_boundary(Boundary::Bounded);
        toroidal.step();
        bounded.step();
        assert_eq!(toroidal.stats().population, 3);
        assert_eq!(bounded.stats().population, 0);
    }

    #[test]
    fn random_seed_is_near_density() {
        let life = ClassicalLife::with_seed(50, Boundary::Toroidal, 5).unwrap();
        let share = life.stats().population as f64 / 2500.0;
        assert!((share - SEED_DENSITY).abs() < 0.05);
    }
}
