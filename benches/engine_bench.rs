// benches/engine_bench.rs

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qlife::simulation::engine;
use qlife::{Automaton, EngineConfig, Grid, SeedDensities, run_excitation};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_engine(c: &mut Criterion) {
    c.bench_function("step_50x50", |b| {
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::random(config.size, SeedDensities::default(), &mut rng);
        b.iter(|| engine::step(black_box(&grid), &config, &mut rng));
    });

    c.bench_function("automaton_tick_50x50", |b| {
        let mut automaton = Automaton::with_seed(EngineConfig::default().with_decoherence_rate(0.0), 2)
            .expect("default config is valid");
        b.iter(|| black_box(automaton.step()));
    });

    c.bench_function("ripple_full_pass_50x50", |b| {
        b.iter(|| {
            let mut automaton = Automaton::with_seed(EngineConfig::default(), 3).expect("default config is valid");
            automaton.trigger_ripple(25, 25).expect("origin inside grid");
            let mut elapsed = 0.0;
            while automaton.advance_ripple(elapsed).is_some() {
                elapsed += 1.0 / 60.0;
            }
        });
    });
}

fn benchmark_excitation(c: &mut Criterion) {
    c.bench_function("excitation_run", |b| b.iter(run_excitation));
}

criterion_group!(benches, benchmark_engine, benchmark_excitation);
criterion_main!(benches);
