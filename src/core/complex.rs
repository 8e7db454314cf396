// src/core/complex.rs

//! The complex amplitude primitive shared by the grid engine and the
//! excitation integrator.
//!
//! Amplitudes are plain `num_complex::Complex<f64>` values: `Copy`, immutable
//! by convention, with `+`, `*` and real scaling provided by `num-complex`.
//! This module only names the pieces the engine leans on.

use num_complex::Complex;

/// A complex amplitude whose squared magnitude is read as a probability.
pub type Amplitude = Complex<f64>;

/// The imaginary unit `i`.
pub const I: Amplitude = Complex::new(0.0, 1.0);

/// Additive identity `0 + 0i`.
pub const ZERO: Amplitude = Complex::new(0.0, 0.0);

/// Multiplicative identity `1 + 0i`.
pub const ONE: Amplitude = Complex::new(1.0, 0.0);

/// Builds `r·e^(iθ)`.
#[inline]
pub fn from_polar(r: f64, theta: f64) -> Amplitude {
    Complex::from_polar(r, theta)
}

/// Unit-magnitude rotation `e^(iθ)`.
#[inline]
pub fn phase(theta: f64) -> Amplitude {
    Complex::cis(theta)
}

/// `sqrt(re² + im²)`.
#[inline]
pub fn magnitude(z: Amplitude) -> f64 {
    z.norm()
}

/// `atan2(im, re)`.
#[inline]
pub fn angle(z: Amplitude) -> f64 {
    z.arg()
}
