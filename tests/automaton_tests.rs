// tests/automaton_tests.rs

use qlife::core::complex::ZERO;
use qlife::{
    Automaton, Boundary, Cell, EngineConfig, Grid, LifeError, Operation, Pattern, RunStatus, check_grid_normalization,
    max_norm_deviation,
};
use std::f64::consts::FRAC_1_SQRT_2;

const TOL: f64 = 1e-12;

fn config(size: usize) -> EngineConfig {
    EngineConfig::default().with_size(size)
}

fn assert_cells_close(a: &Cell, b: &Cell, tol: f64) {
    assert!((a.alpha - b.alpha).norm() < tol, "alpha {} vs {}", a.alpha, b.alpha);
    assert!((a.beta - b.beta).norm() < tol, "beta {} vs {}", a.beta, b.beta);
}

#[test]
fn test_every_step_keeps_cells_normalized() -> Result<(), LifeError> {
    for seed in 0..5 {
        let mut automaton = Automaton::with_seed(config(20), seed)?;
        check_grid_normalization(automaton.grid(), None)?;
        for _ in 0..50 {
            automaton.step();
            check_grid_normalization(automaton.grid(), Some(1e-9))?;
        }
    }
    Ok(())
}

#[test]
fn test_same_seed_same_trajectory() -> Result<(), LifeError> {
    let mut a = Automaton::with_seed(config(16), 99)?;
    let mut b = Automaton::with_seed(config(16), 99)?;
    for _ in 0..25 {
        assert_eq!(a.step(), b.step());
    }
    assert_eq!(a.grid(), b.grid());
    Ok(())
}

#[test]
fn test_hadamard_on_cleared_grid() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(10), 1)?;
    automaton.clear();
    assert_eq!(automaton.status(), RunStatus::Extinct);

    automaton.apply_hadamard();
    for (_, _, cell) in automaton.grid().iter() {
        assert!((cell.alpha.re - FRAC_1_SQRT_2).abs() < TOL);
        assert!((cell.beta.re - FRAC_1_SQRT_2).abs() < TOL);
    }
    let stats = automaton.stats();
    assert!((stats.expected_population - 50.0).abs() < 1e-9);
    assert_eq!(stats.superpositions, 100);
    assert!((stats.coherence - 1.0).abs() < TOL);
    assert_eq!(stats.status, RunStatus::Paused);
    Ok(())
}

#[test]
fn test_hadamard_is_an_involution() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(12), 2)?;
    let before = automaton.grid().clone();
    automaton.apply_hadamard();
    automaton.apply_hadamard();
    for ((_, _, a), (_, _, b)) in before.iter().zip(automaton.grid().iter()) {
        assert_cells_close(a, b, 1e-12);
    }
    Ok(())
}

#[test]
fn test_measurement_is_idempotent() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(12), 3)?;
    automaton.apply_measurement();
    assert!(automaton.grid().cells().iter().all(Cell::is_classical));
    assert_eq!(automaton.stats().superpositions, 0);

    let once = automaton.grid().clone();
    automaton.apply_measurement();
    assert_eq!(automaton.grid(), &once);
    Ok(())
}

#[test]
fn test_operators_halt_a_running_automaton() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(10), 4)?;
    automaton.run();
    automaton.apply(&Operation::Collapse { row: 0, col: 0, alive: true })?;
    assert!(automaton.is_running());
    assert_eq!(automaton.grid()[(0, 0)], Cell::ALIVE);

    automaton.apply(&Operation::Hadamard)?;
    assert!(!automaton.is_running());

    automaton.run();
    automaton.apply(&Operation::PlacePattern(Pattern::glider()))?;
    assert!(!automaton.is_running());
    assert_eq!(automaton.stats().generation, 0);
    assert!((automaton.stats().expected_population - 5.0).abs() < TOL);
    Ok(())
}

#[test]
fn test_paused_step_escapes_a_terminal_status() -> Result<(), LifeError> {
    let config = config(8).with_hopping_strength(0.0).with_decoherence_rate(0.0);
    let mut automaton = Automaton::with_seed(config, 10)?;
    automaton.place_pattern(&Pattern::block());
    automaton.run();
    while automaton.is_running() {
        automaton.tick();
    }
    assert_eq!(automaton.status(), RunStatus::Stable);

    let snap = automaton.step();
    assert_eq!(snap.status, RunStatus::Paused);
    assert!(!automaton.is_running());
    automaton.run();
    assert_eq!(automaton.status(), RunStatus::Running);
    Ok(())
}

#[test]
fn test_extreme_couplings_never_break_normalization() -> Result<(), LifeError> {
    for hopping in [1e200, f64::MAX] {
        let mut automaton = Automaton::with_seed(config(8).with_hopping_strength(hopping), 11)?;
        for _ in 0..3 {
            automaton.step();
            check_grid_normalization(automaton.grid(), Some(1e-9))?;
        }
    }
    Ok(())
}

#[test]
fn test_history_keeps_the_latest_entries() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(6).with_decoherence_rate(0.0), 5)?;
    for _ in 0..320 {
        automaton.step();
    }
    let history = automaton.history();
    assert_eq!(history.len(), 300);
    let generations: Vec<u64> = history.iter().map(|s| s.generation).collect();
    assert_eq!(generations.first(), Some(&21));
    assert_eq!(generations.last(), Some(&320));
    assert!(generations.windows(2).all(|w| w[1] == w[0] + 1));
    Ok(())
}

#[test]
fn test_ripple_far_beyond_grid_touches_only_target() -> Result<(), LifeError> {
    let config = config(10).with_boundary(Boundary::Bounded);
    let mut automaton = Automaton::with_seed(config, 6)?;
    let before = automaton.grid().clone();

    automaton.trigger_ripple(0, 0)?;
    assert_eq!(automaton.grid()[(0, 0)], Cell::DEAD);

    let progress = automaton.advance_ripple(2.0).expect("ripple in flight");
    assert!(progress.done);
    assert_eq!(progress.cells_touched, 0);
    assert!(automaton.ripple().is_none());
    assert!(automaton.advance_ripple(2.1).is_none());

    for (row, col, cell) in automaton.grid().iter() {
        if (row, col) != (0, 0) {
            assert_eq!(cell, &before[(row, col)], "cell ({}, {}) changed", row, col);
        }
    }
    Ok(())
}

#[test]
fn test_ripple_ticks_stay_inside_the_band() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(20), 7)?;
    automaton.trigger_ripple(10, 10)?;

    let mut elapsed = 0.0;
    loop {
        elapsed += 0.05;
        let before = automaton.grid().clone();
        let Some(progress) = automaton.advance_ripple(elapsed) else { break };
        for (row, col, cell) in automaton.grid().iter() {
            let distance = ((row as f64 - 10.0).powi(2) + (col as f64 - 10.0).powi(2)).sqrt();
            if (distance - progress.radius).abs() >= 2.0 {
                assert_eq!(cell, &before[(row, col)], "cell ({}, {}) outside the band changed", row, col);
            }
        }
        assert!(max_norm_deviation(automaton.grid()) < 1e-9);
        if progress.done {
            break;
        }
    }
    assert!(automaton.ripple().is_none());
    Ok(())
}

#[test]
fn test_ripple_ticks_do_not_count_generations() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(8), 8)?;
    automaton.step();
    automaton.trigger_ripple(3, 3)?;
    automaton.advance_ripple(0.1);
    automaton.advance_ripple(0.2);
    assert_eq!(automaton.stats().generation, 1);
    Ok(())
}

#[test]
fn test_invalid_inputs_are_rejected() -> Result<(), LifeError> {
    let mut automaton = Automaton::with_seed(config(5), 9)?;
    assert!(matches!(automaton.trigger_ripple(5, 0), Err(LifeError::OutOfBounds { .. })));
    assert!(automaton.set_decoherence_rate(1.5).is_err());
    assert!(Automaton::with_seed(config(0), 0).is_err());
    assert!(Grid::from_cells(2, vec![Cell::new(ZERO, ZERO); 3]).is_err());
    Ok(())
}
