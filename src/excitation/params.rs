// src/excitation/params.rs

use crate::core::LifeError;
use crate::core::complex::{Amplitude, ONE, ZERO};
use crate::core::constants::excitation_constants::MAX_STEPS;
use num_complex::Complex;

/// A 2×2 complex matrix, row-major.
pub type Matrix2 = [[Amplitude; 2]; 2];

/// Square activation pulse: 1.0 on `[activation_time, activation_time + duration]`, else 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pulse {
    /// Start of the window.
    pub activation_time: f64,
    /// Length of the window.
    pub duration: f64,
}

impl Pulse {
    /// Pulse value at `t`; both window edges are inside.
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        if self.activation_time <= t && t <= self.activation_time + self.duration { 1.0 } else { 0.0 }
    }
}

/// Constants of the two-level excitation run.
///
/// `Default` is the fixed configuration used by [`run_excitation`](super::run_excitation).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcitationParams {
    /// Initial `(ψ0, ψ1)`.
    pub initial: [Amplitude; 2],
    /// Linear operator, scaled by `t · pulse(t)`.
    pub h0: Matrix2,
    /// Nonlinear operator; enters as `(V·ψ) ⊙ ψ`.
    pub v: Matrix2,
    /// Integration start time.
    pub t_start: f64,
    /// Integration end time (inclusive).
    pub t_end: f64,
    /// Fixed RK4 step.
    pub dt: f64,
    /// Activation window of the linear term.
    pub pulse: Pulse,
}

impl Default for ExcitationParams {
    fn default() -> Self {
        let re = |x: f64| Complex::new(x, 0.0);
        Self {
            initial: [ONE, ZERO],
            h0: [[re(0.1), re(0.5)], [re(0.5), re(-0.1)]],
            v: [[ZERO, re(0.02)], [re(0.02), ZERO]],
            t_start: 0.0,
            t_end: 20.0,
            dt: 0.1,
            pulse: Pulse { activation_time: 5.0, duration: 2.0 },
        }
    }
}

impl ExcitationParams {
    /// Number of RK4 steps between `t_start` and `t_end`.
    pub fn steps(&self) -> usize {
        ((self.t_end - self.t_start) / self.dt).round() as usize
    }

    /// Rejects non-finite entries, a non-positive step, an empty span, a span
    /// of more than ten million steps or less than one, and a zero initial state.
    pub fn validate(&self) -> Result<(), LifeError> {
        let invalid = |message: String| Err(LifeError::InvalidConfiguration { message });
        let scalars = [self.t_start, self.t_end, self.dt, self.pulse.activation_time, self.pulse.duration];
        if scalars.iter().any(|x| !x.is_finite()) {
            return invalid("excitation time parameters must be finite".to_string());
        }
        let mut amplitudes = self.initial.iter().chain(self.h0.iter().flatten()).chain(self.v.iter().flatten());
        if amplitudes.any(|z| !z.re.is_finite() || !z.im.is_finite()) {
            return invalid("excitation operators and initial state must be finite".to_string());
        }
        if self.dt <= 0.0 {
            return invalid(format!("dt must be positive, got {}", self.dt));
        }
        if self.t_end <= self.t_start {
            return invalid(format!("t_end ({}) must exceed t_start ({})", self.t_end, self.t_start));
        }
        let steps = ((self.t_end - self.t_start) / self.dt).round();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return invalid(format!("span {}..{} at dt {} exceeds {} steps", self.t_start, self.t_end, self.dt, MAX_STEPS));
        }
        if steps < 1.0 {
            return invalid(format!("span {}..{} is shorter than one step of {}", self.t_start, self.t_end, self.dt));
        }
        if self.initial.iter().map(|z| z.norm_sqr()).sum::<f64>() <= 0.0 {
            return invalid("initial state must be non-zero".to_string());
        }
        Ok(())
    }
}
