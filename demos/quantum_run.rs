//! Seeds a quantum grid, runs it until it settles and prints the statistics

use qlife::{Automaton, EngineConfig, LifeError, Pattern};

fn main() -> Result<(), LifeError> {
    env_logger::init();

    let config = EngineConfig::default().with_size(24);
    let mut automaton = Automaton::with_seed(config, 2024)?;
    println!("Initial grid:\n{}", automaton.grid());

    automaton.run();
    while automaton.is_running() && automaton.stats().generation < 200 {
        automaton.tick();
        if automaton.stats().generation % 25 == 0 {
            println!("{}\n", automaton.stats());
        }
    }
    println!("Final grid ({}):\n{}", automaton.status(), automaton.grid());

    // Same engine, starting from a glider and a round of Hadamard.
    automaton.place_pattern(&Pattern::glider());
    automaton.apply_hadamard();
    for _ in 0..10 {
        automaton.step();
    }
    println!("Glider after Hadamard and 10 steps:\n{}", automaton.stats());
    Ok(())
}
