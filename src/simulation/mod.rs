// src/simulation/mod.rs

//! Drives the quantum grid: evolution steps, run control, statistics and
//! user-triggered events.
//!
//! The [`Automaton`] owns one grid, its configuration and an injected random
//! generator. It performs no timing of its own: an external driver calls
//! [`Automaton::tick`] (or [`Automaton::step`]) at whatever cadence it likes
//! and feeds elapsed animation time into [`Automaton::advance_ripple`].
//! Every mutating method takes `&mut self`, so concurrent mutation of one
//! automaton is ruled out at compile time.

pub mod config;
pub mod engine;
pub mod ripple;
pub mod stats;

// Re-export the main public interface types
pub use config::EngineConfig;
pub use ripple::{Ripple, RippleParams, RippleProgress};
pub use stats::{Classification, GridMetrics, PopulationWindow, RingBuffer, RunStatus, Snapshot};

use crate::core::constants::stats_constants::HISTORY_CAPACITY;
use crate::core::{Boundary, Grid, LifeError, Pattern};
use crate::operations::{self, Operation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A quantum cellular automaton instance.
#[derive(Debug, Clone)]
pub struct Automaton<R: Rng = StdRng> {
    config: EngineConfig,
    grid: Grid,
    rng: R,
    running: bool,
    snapshot: Snapshot,
    history: RingBuffer<Snapshot>,
    window: PopulationWindow,
    ripple: Option<Ripple>,
}

impl Automaton<StdRng> {
    /// Creates an automaton with a random grid drawn from a `StdRng` seeded with `seed`.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, LifeError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Automaton<R> {
    /// Creates an automaton with a random grid drawn from `rng`.
    pub fn with_rng(config: EngineConfig, mut rng: R) -> Result<Self, LifeError> {
        config.validate()?;
        let grid = Grid::random(config.size, config.seed_densities, &mut rng);
        let mut automaton = Self {
            config,
            grid,
            rng,
            running: false,
            snapshot: Snapshot::initial(),
            history: RingBuffer::new(HISTORY_CAPACITY),
            window: PopulationWindow::new(),
            ripple: None,
        };
        automaton.restart_statistics();
        Ok(automaton)
    }

    // --- Accessors ---

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Latest statistics.
    pub fn stats(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Current run status.
    pub fn status(&self) -> RunStatus {
        self.snapshot.status
    }

    /// Snapshot history, oldest first, at most 300 entries.
    pub fn history(&self) -> &RingBuffer<Snapshot> {
        &self.history
    }

    /// Whether [`Automaton::tick`] currently steps.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The ripple in flight, if any.
    pub fn ripple(&self) -> Option<&Ripple> {
        self.ripple.as_ref()
    }

    // --- Configuration ---

    /// Replaces the whole configuration. A size change re-seeds the grid and
    /// restarts statistics; otherwise the new values apply from the next step.
    /// On error the previous configuration stays in effect.
    pub fn configure(&mut self, config: EngineConfig) -> Result<(), LifeError> {
        if let Err(e) = config.validate() {
            log::warn!("configuration rejected: {}", e);
            return Err(e);
        }
        let resized = config.size != self.config.size;
        self.config = config;
        if resized {
            self.reset();
        }
        Ok(())
    }

    /// Changes the grid size, re-seeding when it differs from the current one.
    pub fn set_size(&mut self, size: usize) -> Result<(), LifeError> {
        let config = EngineConfig { size, ..self.config.clone() };
        self.configure(config)
    }

    /// Switches the boundary mode.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.config.boundary = boundary;
    }

    /// Sets the decoherence rate (must lie in `[0, 1]`).
    pub fn set_decoherence_rate(&mut self, rate: f64) -> Result<(), LifeError> {
        config::validate_decoherence_rate(rate).inspect_err(|e| log::warn!("{}", e))?;
        self.config.decoherence_rate = rate;
        Ok(())
    }

    /// Sets the hopping strength (must be finite).
    pub fn set_hopping_strength(&mut self, strength: f64) -> Result<(), LifeError> {
        config::validate_coupling("hopping_strength", strength).inspect_err(|e| log::warn!("{}", e))?;
        self.config.hopping_strength = strength;
        Ok(())
    }

    /// Sets the interaction strength (must be finite).
    pub fn set_interaction_strength(&mut self, strength: f64) -> Result<(), LifeError> {
        config::validate_coupling("interaction_strength", strength).inspect_err(|e| log::warn!("{}", e))?;
        self.config.interaction_strength = strength;
        Ok(())
    }

    /// Sets the driver cadence hint.
    pub fn set_step_interval_ms(&mut self, ms: u64) -> Result<(), LifeError> {
        config::validate_step_interval(ms).inspect_err(|e| log::warn!("{}", e))?;
        self.config.step_interval_ms = ms;
        Ok(())
    }

    // --- Run control ---

    /// Starts stepping on [`Automaton::tick`].
    pub fn run(&mut self) {
        if !self.running {
            self.running = true;
            if !self.snapshot.status.is_terminal() {
                self.snapshot.status = RunStatus::Running;
            }
            log::info!("run started at generation {}", self.snapshot.generation);
        }
    }

    /// Stops stepping on [`Automaton::tick`].
    pub fn pause(&mut self) {
        if self.running {
            self.halt();
        }
    }

    /// Flips between running and paused.
    pub fn toggle_run(&mut self) {
        if self.running { self.pause() } else { self.run() }
    }

    /// Steps once if running; the external driver calls this every frame.
    pub fn tick(&mut self) -> Option<Snapshot> {
        if self.running { Some(self.step()) } else { None }
    }

    /// Performs one evolution step regardless of run state and returns its snapshot.
    ///
    /// Evolve, renormalize, decohere, then measure and classify. Reaching a
    /// terminal status while running halts the run. Stepping a paused
    /// automaton out of a terminal status re-seeds the population window, so
    /// it reports `Paused` unless the grid is still extinct.
    pub fn step(&mut self) -> Snapshot {
        self.grid = engine::step(&self.grid, &self.config, &mut self.rng);
        self.snapshot.generation += 1;
        if !self.running && self.snapshot.status.is_terminal() {
            self.window.clear();
        }
        self.evaluate();
        self.history.push(self.snapshot);
        log::debug!(
            "generation {}: population {:.3}, superpositions {}, status {}",
            self.snapshot.generation,
            self.snapshot.expected_population,
            self.snapshot.superpositions,
            self.snapshot.status
        );
        self.snapshot
    }

    // --- Re-initialization ---

    /// Fresh random grid; statistics, window and history restart.
    pub fn reset(&mut self) {
        self.grid = Grid::random(self.config.size, self.config.seed_densities, &mut self.rng);
        log::info!("grid reset to a random {}x{} state", self.config.size, self.config.size);
        self.restart_statistics();
    }

    /// Fresh all-dead grid; statistics, window and history restart.
    pub fn clear(&mut self) {
        self.grid = Grid::empty(self.config.size);
        log::info!("grid cleared");
        self.restart_statistics();
    }

    /// Fresh empty grid with `pattern` centered on it; statistics restart.
    pub fn place_pattern(&mut self, pattern: &Pattern) {
        self.grid = operations::place_pattern(self.config.size, pattern);
        log::info!("placed {}x{} pattern", pattern.rows(), pattern.cols());
        self.restart_statistics();
    }

    // --- Operators and events ---

    /// Whole-grid Hadamard; halts the run.
    pub fn apply_hadamard(&mut self) {
        self.grid = operations::apply_hadamard(&self.grid);
        self.after_operator();
    }

    /// Whole-grid measurement; halts the run.
    pub fn apply_measurement(&mut self) {
        self.grid = operations::apply_measurement(&self.grid, &mut self.rng);
        self.after_operator();
    }

    /// Applies `op`. Pattern placement restarts statistics like
    /// [`Automaton::place_pattern`]; grid-wide operators halt the run.
    pub fn apply(&mut self, op: &Operation) -> Result<(), LifeError> {
        if let Operation::PlacePattern(pattern) = op {
            self.place_pattern(pattern);
            return Ok(());
        }
        self.grid = op.apply(&self.grid, &mut self.rng)?;
        log::info!("applied {}", op);
        if op.halts_run() {
            self.after_operator();
        } else {
            self.evaluate();
        }
        Ok(())
    }

    /// Collapses `(row, col)` to `|dead⟩` and starts a ripple there, replacing
    /// any ripple still in flight.
    pub fn trigger_ripple(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        self.trigger_ripple_with(row, col, RippleParams::default())
    }

    /// [`Automaton::trigger_ripple`] with a custom wave shape.
    pub fn trigger_ripple_with(&mut self, row: usize, col: usize, params: RippleParams) -> Result<(), LifeError> {
        let ripple = Ripple::trigger_with(&mut self.grid, row, col, params)?;
        if self.ripple.replace(ripple).is_some() {
            log::debug!("previous ripple cancelled");
        }
        self.evaluate();
        Ok(())
    }

    /// Advances the in-flight ripple to `elapsed_seconds` after its trigger.
    /// Returns `None` when no ripple is in flight; a finished ripple is dropped.
    pub fn advance_ripple(&mut self, elapsed_seconds: f64) -> Option<RippleProgress> {
        let ripple = self.ripple.as_mut()?;
        let progress = ripple.advance(&mut self.grid, elapsed_seconds);
        if progress.done {
            self.ripple = None;
        }
        Some(progress)
    }

    // --- Internals ---

    fn halt(&mut self) {
        self.running = false;
        if self.snapshot.status == RunStatus::Running {
            self.snapshot.status = RunStatus::Paused;
        }
        log::info!("run halted at generation {} ({})", self.snapshot.generation, self.snapshot.status);
    }

    fn after_operator(&mut self) {
        if self.running {
            self.halt();
        }
        self.evaluate();
    }

    /// Measures the grid, feeds the window and updates the current snapshot.
    fn evaluate(&mut self) {
        let metrics = stats::measure(&self.grid);
        let status = match self.window.record(metrics.expected_population) {
            Classification::Extinct => RunStatus::Extinct,
            Classification::Stable => RunStatus::Stable,
            Classification::Active if self.running => RunStatus::Running,
            Classification::Active => RunStatus::Paused,
        };
        let previous = self.snapshot.status;
        self.snapshot = Snapshot::with_metrics(self.snapshot.generation, metrics, status);
        if status != previous {
            log::info!("status {} -> {} at generation {}", previous, status, self.snapshot.generation);
        }
        if self.running && status.is_terminal() {
            self.halt();
        }
    }

    fn restart_statistics(&mut self) {
        self.running = false;
        self.ripple = None;
        self.window.clear();
        self.history.clear();
        self.snapshot = Snapshot::initial();
        self.history.push(self.snapshot);
        self.evaluate();
    }
}
