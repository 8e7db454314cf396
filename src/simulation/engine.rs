// src/simulation/engine.rs

//! One discrete evolution step of the quantum grid.
//!
//! The step is a pure map from the previous grid to a new one. All reads come
//! from the previous grid; the new grid is built separately and returned, so
//! the caller swaps it in atomically. The phase order is fixed:
//!
//! 1. Hamiltonian Euler update of every cell from its Moore neighborhood.
//! 2. Renormalization of every cell.
//! 3. Decoherence: one uniform draw per cell, collapsing with probability
//!    `decoherence_rate` to whichever classical state is more likely.
//!
//! Statistics are taken by the caller after phase 3.

use super::config::EngineConfig;
use crate::core::complex::{Amplitude, I};
use crate::core::constants::engine_constants::{
    COLLAPSE_THRESHOLD, DT, POTENTIAL_PENALTY, POTENTIAL_REWARD, SURVIVAL_MAX, SURVIVAL_MIN,
};
use crate::core::random;
use crate::core::{Boundary, Cell, Grid};
use num_traits::Zero;
use rand::Rng;

/// Aggregates of a cell's neighborhood read from the previous grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborField {
    /// Σ neighbor `|β|²`.
    pub prob_sum: f64,
    /// Σ neighbor `β` (complex sum).
    pub hopping: Amplitude,
}

impl NeighborField {
    /// The interaction term reuses the probability sum.
    #[inline]
    pub fn interaction(&self) -> f64 {
        self.prob_sum
    }
}

/// Sums the neighborhood of `(row, col)`.
pub fn neighbor_field(grid: &Grid, row: usize, col: usize, boundary: Boundary) -> NeighborField {
    grid.neighbors(row, col, boundary).fold(
        NeighborField { prob_sum: 0.0, hopping: Amplitude::zero() },
        |acc, n| NeighborField { prob_sum: acc.prob_sum + n.alive_probability(), hopping: acc.hopping + n.beta },
    )
}

/// Classical-rule potential: reward inside the closed band `[2, 3]`, penalty outside.
#[inline]
pub fn potential_energy(neighbor_prob_sum: f64) -> f64 {
    if (SURVIVAL_MIN..=SURVIVAL_MAX).contains(&neighbor_prob_sum) {
        POTENTIAL_REWARD
    } else {
        POTENTIAL_PENALTY
    }
}

/// Euler update of one cell, unnormalized.
///
/// `dα = -i·J·dt·β·h` and `dβ = -i·(U·n + V)·dt·β + i·J·dt·α·h`, where `h` is
/// the neighbor β sum, `n` the neighbor probability sum, `V` the potential,
/// `J` the hopping strength and `U` the interaction strength.
pub fn evolve_cell(cell: &Cell, field: &NeighborField, hopping_strength: f64, interaction_strength: f64) -> Cell {
    let d_alpha = cell.beta * field.hopping * (-hopping_strength * DT) * I;

    let energy = (interaction_strength * field.interaction() + potential_energy(field.prob_sum)) * DT;
    let d_beta_energy = cell.beta * energy * -I;
    let d_beta_hopping = cell.alpha * field.hopping * (hopping_strength * DT) * I;

    Cell {
        alpha: cell.alpha + d_alpha,
        beta: cell.beta + d_beta_energy + d_beta_hopping,
    }
}

/// Phases 1 and 2: Hamiltonian update followed by renormalization.
pub fn evolve(grid: &Grid, config: &EngineConfig) -> Grid {
    let size = grid.size();
    let mut next = grid.clone();
    for (k, slot) in next.cells_mut().iter_mut().enumerate() {
        let (row, col) = (k / size, k % size);
        let field = neighbor_field(grid, row, col, config.boundary);
        *slot = evolve_cell(&grid.cells()[k], &field, config.hopping_strength, config.interaction_strength).normalized();
    }
    next
}

/// Phase 3: forced collapse of each cell with probability `rate`.
///
/// A collapsing cell becomes `|alive⟩` if its alive-probability exceeds 0.5,
/// otherwise `|dead⟩`. Returns the number of collapsed cells.
pub fn decohere<R: Rng + ?Sized>(grid: &mut Grid, rate: f64, rng: &mut R) -> usize {
    let mut collapsed = 0;
    for cell in grid.cells_mut() {
        if random::unit(rng) < rate {
            *cell = Cell::classical(cell.alive_probability() > COLLAPSE_THRESHOLD);
            collapsed += 1;
        }
    }
    collapsed
}

/// Full step: evolve, renormalize, decohere.
pub fn step<R: Rng + ?Sized>(grid: &Grid, config: &EngineConfig, rng: &mut R) -> Grid {
    let mut next = evolve(grid, config);
    let collapsed = decohere(&mut next, config.decoherence_rate, rng);
    log::trace!("decoherence collapsed {} of {} cells", collapsed, next.len());
    debug_assert!(
        crate::validation::check_grid_normalization(&next, Some(1e-6)).is_ok(),
        "step produced an unnormalized cell"
    );
    next
}
