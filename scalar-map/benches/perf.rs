//! Benchmark: scalar-map performance
//!
//! Measures batch insert and lookup per key variant, and compares the
//! default hasher against the pass-through fingerprint hasher.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scalar_map::{FingerprintState, Scalar, ScalarMap};

// Number of keys per benchmark
const SMALL_OPS: usize = 1_000;
const MEDIUM_OPS: usize = 10_000;
const LARGE_OPS: usize = 100_000;

fn integer_keys(size: usize) -> Vec<Scalar> {
    (0..size as i32).map(Scalar::Integer).collect()
}

fn float_keys(size: usize) -> Vec<Scalar> {
    (0..size).map(|i| Scalar::Float(i as f64 * 0.25)).collect()
}

fn text_keys(size: usize) -> Vec<Scalar> {
    (0..size).map(|i| Scalar::Text(format!("key_{}", i))).collect()
}

/// Benchmark: batch insert for each key variant
fn bench_insert_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_batch");

    for &size in &[SMALL_OPS, MEDIUM_OPS, LARGE_OPS] {
        group.throughput(Throughput::Elements(size as u64));
        let values = integer_keys(size);

        for (name, keys) in [
            ("integer", integer_keys(size)),
            ("float", float_keys(size)),
            ("text", text_keys(size)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    let mut map = ScalarMap::new();
                    map.insert_batch(black_box(keys.clone()), black_box(values.clone()))
                        .unwrap();
                    map
                });
            });
        }
    }

    group.finish();
}

/// Benchmark: batch get, default hasher vs pass-through
fn bench_get_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_batch");

    for &size in &[SMALL_OPS, MEDIUM_OPS, LARGE_OPS] {
        group.throughput(Throughput::Elements(size as u64));
        let keys = text_keys(size);
        let values = integer_keys(size);

        let mut folded = ScalarMap::new();
        folded.insert_batch(keys.clone(), values.clone()).unwrap();
        group.bench_with_input(BenchmarkId::new("foldhash", size), &size, |b, _| {
            b.iter(|| folded.get_batch(black_box(&keys)));
        });

        let mut passthrough = ScalarMap::with_hasher(FingerprintState);
        passthrough.insert_batch(keys.clone(), values).unwrap();
        group.bench_with_input(BenchmarkId::new("fingerprint", size), &size, |b, _| {
            b.iter(|| passthrough.get_batch(black_box(&keys)));
        });
    }

    group.finish();
}

/// Benchmark: floats that truncate to few fingerprints
fn bench_truncated_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncated_floats");
    let size = SMALL_OPS;
    group.throughput(Throughput::Elements(size as u64));

    // 1000 keys share 10 fingerprints.
    let keys: Vec<_> = (0..size)
        .map(|i| Scalar::Float((i % 10) as f64 + (i / 10) as f64 * 0.001))
        .collect();
    let values = integer_keys(size);

    let mut map = ScalarMap::with_hasher(FingerprintState);
    map.insert_batch(keys.clone(), values).unwrap();
    group.bench_function("get_batch", |b| {
        b.iter(|| map.get_batch(black_box(&keys)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_batch,
    bench_get_batch,
    bench_truncated_floats,
);

criterion_main!(benches);
