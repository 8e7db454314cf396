// src/lib.rs

//! `qlife` - a quantum-amplitude take on Conway's Game of Life.
//!
//! Every cell holds a pair of complex amplitudes `(α, β)` for `|dead⟩` and
//! `|alive⟩`. A step evolves the grid under a Hamiltonian inspired by the
//! B3/S23 rule, renormalizes, then lets cells decohere at random. On top of
//! that the crate offers grid-wide Hadamard and measurement operators, a
//! radial phase ripple, an extinction/stability classifier, a classical Life
//! counterpart, an independent two-level excitation integrator and a message
//! transduction pipeline built around it.

pub mod core;
pub mod operations;
pub mod simulation;
pub mod excitation;
pub mod transduction;
pub mod classical;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{Amplitude, Boundary, Cell, Grid, LifeError, Pattern, SeedDensities};
pub use operations::Operation;
pub use simulation::{Automaton, EngineConfig, Ripple, RippleParams, RippleProgress, RunStatus, Snapshot};
pub use excitation::{ExcitationParams, ExcitationReport, ExcitationSample, ProcessMetrics, run_excitation, run_excitation_with};
pub use transduction::{ProcessStatus, QuantumPacket, Transducer};
pub use classical::{ClassicalLife, ClassicalStats};
pub use validation::{check_cell_normalization, check_grid_normalization, max_norm_deviation};

// Example 1: A glider under the quantum rule
// Places a glider, runs a few steps and checks that every cell stays normalized.
/// ```
/// use qlife::{Automaton, EngineConfig, LifeError, Pattern, check_grid_normalization};
///
/// let mut automaton = Automaton::with_seed(EngineConfig::default().with_size(16), 42)?;
/// automaton.place_pattern(&Pattern::glider());
/// assert_eq!(automaton.stats().generation, 0);
///
/// automaton.run();
/// for _ in 0..10 {
///     automaton.tick();
/// }
/// println!("{}", automaton.stats());
/// check_grid_normalization(automaton.grid(), None)?;
/// # Ok::<(), LifeError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Hadamard on a cleared grid
// Every dead cell becomes an equal superposition.
/// ```
/// use qlife::{Automaton, EngineConfig, LifeError};
///
/// let mut automaton = Automaton::with_seed(EngineConfig::default().with_size(8), 7)?;
/// automaton.clear();
/// automaton.apply_hadamard();
///
/// let population = automaton.stats().expected_population;
/// assert!((population - 32.0).abs() < 1e-9);
/// assert_eq!(automaton.stats().superpositions, 64);
/// # Ok::<(), LifeError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 3: Excitation run
/// ```
/// let report = qlife::run_excitation();
/// assert_eq!(report.samples().len(), 201);
/// println!("fidelity {:.2}%", report.fidelity() * 100.0);
/// ```
#[doc(hidden)]
const _: () = ();
