use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use swarmopt::prelude::*;

fn build_optimizer(
    pop_size: usize,
    max_iters: usize,
) -> SwarmOptimizer<Minimize<fn(f64) -> f64>> {
    SwarmBuilder::default(-100.0, 100.0)
        .pop_size(pop_size)
        .max_iters(max_iters)
        .seed(42)
        .build(Minimize(shifted_parabola as fn(f64) -> f64))
        .expect("Failed to build optimizer")
}

fn benchmark_swarm(c: &mut Criterion) {
    c.bench_function("full_run", |b| {
        b.iter(|| {
            let mut optimizer = build_optimizer(black_box(30), black_box(100));
            optimizer.initialize().expect("Failed to initialize swarm");
            let _ = black_box(optimizer.run().expect("Failed to optimize"));
        });
    });

    c.bench_function("initialize", |b| {
        b.iter(|| {
            let mut optimizer = build_optimizer(black_box(200), 0);
            optimizer.initialize().expect("Failed to initialize swarm");
            black_box(optimizer.best());
        });
    });
}

criterion_group!(benches, benchmark_swarm);
criterion_main!(benches);
