//! Criterion benchmarks for randgen_core generators.
//!
//! Compares draw cost across engines and sharing strategies, so the lock
//! taken by `Global` and `SyncGenerator` can be weighed against owned and
//! thread-local draws.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::{SmallRng, StdRng};
use randgen_core::distributions::{Gaussian, Poisson, UniformInt};
use randgen_core::engine::{ExplicitSeed, FixedSeed};
use randgen_core::shared::{Global, Local, SyncGenerator};
use randgen_core::Generator;

type StdInt = Generator<i64, UniformInt<i64>, StdRng, ExplicitSeed>;
type SmallInt = Generator<i64, UniformInt<i64>, SmallRng, ExplicitSeed>;
type SharedInt = Generator<i64, UniformInt<i64>, SmallRng, FixedSeed<42>>;

/// Benchmark single ranged draws per engine.
fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_range");

    let mut std_gen = StdInt::from_seed(42);
    group.bench_function("std_rng", |b| {
        b.iter(|| std_gen.range(black_box(0), black_box(100)).unwrap())
    });

    let mut small_gen = SmallInt::from_seed(42);
    group.bench_function("small_rng", |b| {
        b.iter(|| small_gen.range(black_box(0), black_box(100)).unwrap())
    });

    group.finish();
}

/// Benchmark the sharing strategies on the same instantiation.
fn bench_scopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_value");

    let mut owned = SharedInt::new();
    group.bench_function("owned", |b| b.iter(|| black_box(owned.value())));

    group.bench_function("local", |b| b.iter(|| black_box(Local::<SharedInt>::value())));

    group.bench_function("global", |b| b.iter(|| black_box(Global::<SharedInt>::value())));

    let synced = SyncGenerator::new(SharedInt::new());
    group.bench_function("sync", |b| b.iter(|| black_box(synced.value())));

    group.finish();
}

/// Benchmark batch fills against per-draw calls.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_fill");

    for size in [100, 1_000, 10_000] {
        let mut gen: Generator<f64, Gaussian<f64>, SmallRng, ExplicitSeed> =
            Generator::from_seed(7);
        let mut buffer = vec![0.0; size];
        group.bench_with_input(BenchmarkId::new("fill", size), &size, |b, _| {
            b.iter(|| gen.fill(black_box(&mut buffer)))
        });
    }

    group.finish();
}

/// Benchmark per-call parameter validation cost.
fn bench_value_param(c: &mut Criterion) {
    let mut gen: Generator<u32, Poisson<u32>, SmallRng, ExplicitSeed> = Generator::from_seed(3);
    c.bench_function("poisson_value_param", |b| {
        b.iter(|| gen.value_param(black_box(4.0)).unwrap())
    });
}

criterion_group!(benches, bench_engines, bench_scopes, bench_fill, bench_value_param);
criterion_main!(benches);
