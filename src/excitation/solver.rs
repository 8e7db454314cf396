// src/excitation/solver.rs

//! Fixed-step RK4 on the flattened state `[Re ψ0, Im ψ0, Re ψ1, Im ψ1]`.

use super::params::{ExcitationParams, Matrix2};
use crate::core::complex::{Amplitude, ZERO};
use crate::core::constants::engine_constants::NORM_EPSILON;
use num_complex::Complex;

/// Flattened two-level state.
pub type State = [f64; 4];

/// Packs `(ψ0, ψ1)` into a flat state.
pub fn flatten(psi: [Amplitude; 2]) -> State {
    [psi[0].re, psi[0].im, psi[1].re, psi[1].im]
}

/// Unpacks a flat state into `(ψ0, ψ1)`.
pub fn unflatten(y: &State) -> [Amplitude; 2] {
    [Complex::new(y[0], y[1]), Complex::new(y[2], y[3])]
}

fn mat_vec(m: &Matrix2, psi: &[Amplitude; 2]) -> [Amplitude; 2] {
    let mut out = [ZERO; 2];
    for (row, slot) in m.iter().zip(out.iter_mut()) {
        *slot = row[0] * psi[0] + row[1] * psi[1];
    }
    out
}

/// `dψ/dt = -i·[(H0·t·pulse(t))·ψ + (V·ψ) ⊙ ψ]`.
pub fn rhs(y: &State, t: f64, params: &ExcitationParams) -> State {
    let psi = unflatten(y);
    let scale = t * params.pulse.value(t);

    let linear = mat_vec(&params.h0, &psi);
    let v_psi = mat_vec(&params.v, &psi);

    let mut dy = [0.0; 4];
    for k in 0..2 {
        let h = linear[k] * scale + v_psi[k] * psi[k];
        // -i·(a + bi) = b - ai
        dy[2 * k] = h.im;
        dy[2 * k + 1] = -h.re;
    }
    dy
}

fn axpy(y: &State, a: f64, k: &State) -> State {
    let mut out = *y;
    for (o, ki) in out.iter_mut().zip(k) {
        *o += a * ki;
    }
    out
}

/// One classical RK4 step from `t` to `t + dt`.
pub fn rk4_step(y: &State, t: f64, dt: f64, params: &ExcitationParams) -> State {
    let k1 = rhs(y, t, params);
    let k2 = rhs(&axpy(y, dt / 2.0, &k1), t + dt / 2.0, params);
    let k3 = rhs(&axpy(y, dt / 2.0, &k2), t + dt / 2.0, params);
    let k4 = rhs(&axpy(y, dt, &k3), t + dt, params);

    let mut next = *y;
    for i in 0..4 {
        next[i] += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    next
}

/// Rescales the state to unit norm; degenerate or non-finite norms are left unchanged.
pub fn normalize(y: &mut State) {
    let norm = y.iter().fold(0.0_f64, |acc, x| acc.hypot(*x));
    if norm.is_finite() && norm > NORM_EPSILON {
        for x in y.iter_mut() {
            *x /= norm;
        }
    }
}
