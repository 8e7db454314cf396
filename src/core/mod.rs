// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod cell;
pub mod complex;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod random;

// Re-export public types for convenient access via `qlife::core::TypeName`
pub use cell::Cell;
pub use complex::Amplitude;
pub use error::LifeError;
pub use grid::{Boundary, Grid, SeedDensities};
pub use pattern::Pattern;

pub mod constants;
pub use constants::engine_constants::{DT, NORM_TOLERANCE}; // Re-export
