//! Uniform draws from an injected generator.
//!
//! All stochastic parts of the crate (seeding, decoherence, measurement) draw
//! through here so a seeded `StdRng` reproduces a run bit for bit.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

/// One uniform sample in `[0, 1)`.
#[inline]
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardUniform.sample(rng)
}
