//! Benchmarks for the transition rule and the stepping loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_life::automaton::Automaton;
use rust_life::core::{AutomatonConfig, LifeRng};
use rust_life::grid::transition;
use rust_life::placement::Placement;

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");
    for size in [64usize, 256, 1024] {
        let grid = Placement::RANDOM.seed(size, size, &mut LifeRng::new(7));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| transition(black_box(grid)))
        });
    }
    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let config = AutomatonConfig::new(256, 256)
        .with_placement(Placement::RANDOM)
        .with_max_frames(25);

    c.bench_function("advance_256_scrolling", |b| {
        b.iter_batched(
            || Automaton::initialize(&config, &mut LifeRng::new(7)).unwrap(),
            |mut automaton| {
                for _ in 0..50 {
                    black_box(automaton.advance());
                }
                automaton
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_seed(c: &mut Criterion) {
    c.bench_function("seed_noise_256", |b| {
        let placement = Placement::default();
        let mut rng = LifeRng::new(7);
        b.iter(|| placement.seed(black_box(256), black_box(256), &mut rng))
    });
}

criterion_group!(benches, bench_transition, bench_advance, bench_seed);
criterion_main!(benches);
