// src/simulation/config.rs

use crate::core::{Boundary, LifeError, SeedDensities};

/// Live-tunable parameters of an [`Automaton`](super::Automaton).
///
/// Couplings take effect on the next step; changing `size` re-seeds the grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Edge length of the square grid.
    pub size: usize,
    /// Neighbor lookup at the grid edge.
    pub boundary: Boundary,
    /// Per-cell, per-step probability of a forced classical collapse.
    pub decoherence_rate: f64,
    /// Amplitude-transfer coefficient between neighbors.
    pub hopping_strength: f64,
    /// Energy coefficient on aggregate neighbor alive-probability.
    pub interaction_strength: f64,
    /// Cadence hint for the external driver, in milliseconds. The engine never sleeps.
    pub step_interval_ms: u64,
    /// Category split used when the grid is re-seeded.
    pub seed_densities: SeedDensities,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 50,
            boundary: Boundary::Toroidal,
            decoherence_rate: 0.005,
            hopping_strength: 0.1,
            interaction_strength: 0.05,
            step_interval_ms: 100,
            seed_densities: SeedDensities::default(),
        }
    }
}

impl EngineConfig {
    /// Sets the grid size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the boundary mode.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the decoherence rate.
    pub fn with_decoherence_rate(mut self, rate: f64) -> Self {
        self.decoherence_rate = rate;
        self
    }

    /// Sets the hopping strength.
    pub fn with_hopping_strength(mut self, strength: f64) -> Self {
        self.hopping_strength = strength;
        self
    }

    /// Sets the interaction strength.
    pub fn with_interaction_strength(mut self, strength: f64) -> Self {
        self.interaction_strength = strength;
        self
    }

    /// Sets the seeding densities.
    pub fn with_seed_densities(mut self, densities: SeedDensities) -> Self {
        self.seed_densities = densities;
        self
    }

    /// Rejects zero-sized grids, non-finite couplings, a decoherence rate
    /// outside `[0, 1]`, a zero step interval and invalid seed densities.
    pub fn validate(&self) -> Result<(), LifeError> {
        validate_size(self.size)?;
        validate_decoherence_rate(self.decoherence_rate)?;
        validate_coupling("hopping_strength", self.hopping_strength)?;
        validate_coupling("interaction_strength", self.interaction_strength)?;
        validate_step_interval(self.step_interval_ms)?;
        let SeedDensities { alive_probability, superposition_probability } = self.seed_densities;
        if !(alive_probability.is_finite() && superposition_probability.is_finite())
            || alive_probability < 0.0
            || superposition_probability < 0.0
            || alive_probability + superposition_probability > 1.0
        {
            return Err(invalid(format!(
                "seed densities must be non-negative and sum to at most 1, got alive={} superposition={}",
                alive_probability, superposition_probability
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> LifeError {
    LifeError::InvalidConfiguration { message }
}

pub(crate) fn validate_size(size: usize) -> Result<(), LifeError> {
    if size == 0 {
        return Err(invalid("grid size must be at least 1".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_coupling(name: &str, value: f64) -> Result<(), LifeError> {
    if !value.is_finite() {
        return Err(invalid(format!("{} must be finite, got {}", name, value)));
    }
    Ok(())
}

pub(crate) fn validate_decoherence_rate(rate: f64) -> Result<(), LifeError> {
    validate_coupling("decoherence_rate", rate)?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(invalid(format!("decoherence_rate must lie in [0, 1], got {}", rate)));
    }
    Ok(())
}

pub(crate) fn validate_step_interval(ms: u64) -> Result<(), LifeError> {
    if ms == 0 {
        return Err(invalid("step_interval_ms must be positive".to_string()));
    }
    Ok(())
}
