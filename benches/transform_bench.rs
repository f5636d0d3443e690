//! Benchmark for the free transform functions.
//!
//! Compares seqfn's transforms against the equivalent hand-written iterator
//! chains to evaluate the overhead (if any) of the abstraction.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqfn::transform::{filter, group_by, group_by_fast, map, reduce};
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// filter / map / reduce Benchmarks
// =============================================================================

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqfn", size), &values, |bencher, values| {
            bencher.iter(|| black_box(filter(values, |value| value % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(
                    values
                        .iter()
                        .filter(|value| *value % 3 == 0)
                        .copied()
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

fn benchmark_map_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_reduce");

    for size in [100, 1000, 10000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqfn", size), &values, |bencher, values| {
            bencher.iter(|| {
                let squared = map(values, |value| value * value);
                black_box(reduce(&squared, 0_i64, |total, value| total.wrapping_add(*value)))
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(
                    values
                        .iter()
                        .map(|value| value * value)
                        .fold(0_i64, i64::wrapping_add),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// group_by Benchmarks
// =============================================================================

fn benchmark_group_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [100, 1000, 10000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("std_hasher", size), &values, |bencher, values| {
            bencher.iter(|| black_box(group_by(values, |value| value % 64)));
        });

        group.bench_with_input(BenchmarkId::new("group_hasher", size), &values, |bencher, values| {
            bencher.iter(|| black_box(group_by_fast(values, |value| value % 64)));
        });

        group.bench_with_input(BenchmarkId::new("manual", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut groups: HashMap<u64, Vec<u64>> = HashMap::new();
                for value in values {
                    groups.entry(value % 64).or_default().push(*value);
                }
                black_box(groups)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_filter, benchmark_map_reduce, benchmark_group_by);
criterion_main!(benches);
