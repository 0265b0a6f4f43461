//! Benchmark for room path generation.
//!
//! Run with: cargo bench --package bramble_procedural --bench path_benchmark

use bramble_procedural::{RoomBuilder, RoomPosition, UniformRandom};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn benchmark_short_path(c: &mut Criterion) {
    let start = RoomPosition::ZERO;
    let target = RoomPosition::new(5, 3, 2);

    c.bench_function("path_10_rooms", |b| {
        let mut rng = UniformRandom::new(42);
        b.iter(|| {
            black_box(RoomBuilder::find_path(
                &mut rng,
                black_box(start),
                1,
                black_box(target),
            ))
        });
    });
}

fn benchmark_long_path(c: &mut Criterion) {
    let start = RoomPosition::new(-200, -100, -50);
    let target = RoomPosition::new(200, 100, 50);

    let mut group = c.benchmark_group("long_path");
    group.throughput(Throughput::Elements(
        u64::from(start.manhattan_distance(target)) + 1,
    ));

    group.bench_function("900_rooms", |b| {
        let mut rng = UniformRandom::new(42);
        b.iter(|| {
            black_box(RoomBuilder::find_path(
                &mut rng,
                black_box(start),
                1,
                black_box(target),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_short_path, benchmark_long_path);
criterion_main!(benches);
