//! Drops a ripple into a measured grid and plays it at 60 frames per second

use qlife::{Automaton, Boundary, EngineConfig, LifeError};

fn main() -> Result<(), LifeError> {
    env_logger::init();

    let config = EngineConfig::default().with_size(30).with_boundary(Boundary::Bounded);
    let mut automaton = Automaton::with_seed(config, 7)?;
    automaton.apply_measurement();
    automaton.trigger_ripple(15, 15)?;

    let frame = 1.0 / 60.0;
    let mut elapsed = 0.0;
    while let Some(progress) = automaton.advance_ripple(elapsed) {
        if progress.cells_touched > 0 {
            println!("t = {:.3}s radius {:>5.1}: {} cells shifted", elapsed, progress.radius, progress.cells_touched);
        }
        elapsed += frame;
    }
    println!("{}", automaton.stats());
    Ok(())
}
