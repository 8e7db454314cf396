//! Numeric constants fixed by the automaton's update rule.

/// Constants of the grid engine.
pub mod engine_constants {
    /// Euler time step of one evolution step.
    pub const DT: f64 = 0.5;
    /// Norms at or below this are treated as degenerate and reset to `|dead⟩`.
    pub const NORM_EPSILON: f64 = 1e-9;
    /// Tolerance of the `|α|² + |β|² = 1` invariant at API boundaries.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Lower edge of the neighbor-probability band rewarded by the potential.
    pub const SURVIVAL_MIN: f64 = 2.0;
    /// Upper edge of the neighbor-probability band rewarded by the potential.
    pub const SURVIVAL_MAX: f64 = 3.0;
    /// Potential inside `[SURVIVAL_MIN, SURVIVAL_MAX]`.
    pub const POTENTIAL_REWARD: f64 = -0.1;
    /// Potential outside `[SURVIVAL_MIN, SURVIVAL_MAX]`.
    pub const POTENTIAL_PENALTY: f64 = 0.1;
    /// Decoherence collapses to alive above this alive-probability.
    pub const COLLAPSE_THRESHOLD: f64 = 0.5;
}

/// Constants of the statistics and classifier.
pub mod stats_constants {
    /// Alive-probability strictly above this counts toward superpositions.
    pub const SUPERPOSITION_LOW: f64 = 0.05;
    /// Alive-probability strictly below this counts toward superpositions.
    pub const SUPERPOSITION_HIGH: f64 = 0.95;
    /// Expected population below this classifies as extinct.
    pub const EXTINCTION_THRESHOLD: f64 = 0.01;
    /// Population standard deviation below this classifies as stable.
    pub const STABILITY_STD_DEV: f64 = 0.1;
    /// Minimum number of window entries before stability is considered.
    pub const STABILITY_MIN_SAMPLES: usize = 15;
    /// Capacity of the population window.
    pub const POPULATION_WINDOW: usize = 20;
    /// Capacity of the snapshot history.
    pub const HISTORY_CAPACITY: usize = 300;
}

/// Constants of the ripple wavefront.
pub mod ripple_constants {
    /// Radial speed in grid units per second.
    pub const WAVE_SPEED: f64 = 25.0;
    /// Width of the annular wavefront in grid units.
    pub const WAVE_WIDTH: f64 = 4.0;
    /// Phase-shift amplitude at radius zero.
    pub const INITIAL_AMPLITUDE: f64 = std::f64::consts::TAU;
    /// Exponential decay of the amplitude per grid unit of radius.
    pub const DECAY_RATE: f64 = 0.05;
    /// Weight of the polar angle in the phase shift.
    pub const SPIRAL_FACTOR: f64 = 1.5;
    /// The ripple ends once its radius reaches this multiple of the grid size.
    pub const MAX_RADIUS_FACTOR: f64 = 1.5;
}

/// Constants of the classical B3/S23 counterpart.
pub mod classical_constants {
    /// Share of live cells in a random seed.
    pub const SEED_DENSITY: f64 = 0.3;
    /// Capacity of the population window.
    pub const POPULATION_WINDOW: usize = 10;
    /// The window must hold more than this many entries before a repeat counts as stable.
    pub const STABILITY_MIN_SAMPLES: usize = 5;
}

/// Constants of the two-level excitation integrator.
pub mod excitation_constants {
    /// Largest number of RK4 steps a single run may take.
    pub const MAX_STEPS: usize = 10_000_000;
}
