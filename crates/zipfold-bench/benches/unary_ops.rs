//! Criterion micro-benchmarks for the unary operators on 10K elements.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use zipfold_bench::{ints, students, REFERENCE_LEN};
use zipfold_test_utils::fixtures::passing_student_names;

/// Benchmark: map 10K ints to i64, including the input release sweep.
fn bench_map_10k(c: &mut Criterion) {
    c.bench_function("map_10k", |b| {
        b.iter_batched(
            || ints(REFERENCE_LEN),
            |input| {
                let out = input.map(|x| i64::from(*x) * 2).unwrap();
                black_box(out);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: filter 10K ints keeping roughly half.
fn bench_filter_10k(c: &mut Criterion) {
    c.bench_function("filter_10k", |b| {
        b.iter_batched(
            || ints(REFERENCE_LEN),
            |input| {
                let out = input.filter(|x| x % 2 == 0).unwrap();
                black_box(out);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: sum 10K ints with reduce (no allocation).
fn bench_reduce_10k(c: &mut Criterion) {
    let input = ints(REFERENCE_LEN);
    c.bench_function("reduce_10k", |b| {
        b.iter(|| {
            let sum = input.reduce(0i64, |acc, x| *acc += i64::from(*x));
            black_box(sum);
        });
    });
}

/// Benchmark: filter + map pipeline over a 10K student roster.
fn bench_student_pipeline_10k(c: &mut Criterion) {
    c.bench_function("student_pipeline_10k", |b| {
        b.iter_batched(
            || students(REFERENCE_LEN),
            |roster| {
                let names = passing_student_names(roster).unwrap();
                black_box(names);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_map_10k,
    bench_filter_10k,
    bench_reduce_10k,
    bench_student_pipeline_10k
);
criterion_main!(benches);
