//! # Step Benchmark
//!
//! Cost of one full frame (boundary, pairwise pass, integration) as the
//! population grows. The pairwise pass is quadratic in the body count.
//!
//! Run with: `cargo bench --bench step_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wigglebox::{MotionPreset, PhysicsWorld, SimulationConfig};

fn warmed_world(count: usize) -> PhysicsWorld {
    let config = SimulationConfig::default()
        .with_population(count, 0.1)
        .with_motion(MotionPreset::Diagonal)
        .with_seed(42);
    let mut world = PhysicsWorld::new(&config).expect("bench config is valid");
    // Let the initial pile fall apart first
    for _ in 0..60 {
        world.step();
    }
    world
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut world = warmed_world(count);
            b.iter(|| {
                world.step();
                black_box(world.frame_count())
            });
        });
    }

    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let world = warmed_world(100);
    c.bench_function("stats_100", |b| b.iter(|| black_box(world.stats())));
}

criterion_group!(benches, bench_step, bench_stats);
criterion_main!(benches);
