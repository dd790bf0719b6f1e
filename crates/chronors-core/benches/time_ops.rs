//! Benchmarks for creation and structural time tensor operations.
//!
//! Run with:
//! ```bash
//! cargo bench --bench time_ops
//! ```

use chronors_core::ops::{rand, stack, tcat, tindex_select, zeros};
use chronors_core::TimeDim;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Benchmark creation with time last
fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("creation");

    let sizes = vec![
        ("series_10k", vec![10_000]),
        ("channels_64x1k", vec![64, 1_000]),
        ("batch_32x500x16", vec![32, 500, 16]),
    ];

    for (name, shape) in sizes {
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::new("zeros", name), &shape, |b, shape| {
            b.iter(|| black_box(zeros::<f64>(black_box(shape), TimeDim::Last).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("rand", name), &shape, |b, shape| {
            b.iter(|| black_box(rand::<f64>(black_box(shape), TimeDim::Last).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark concatenation along the time axis
fn bench_tcat(c: &mut Criterion) {
    let mut group = c.benchmark_group("tcat");

    for parts in [2usize, 8, 32] {
        let tensors: Vec<_> = (0..parts)
            .map(|_| rand::<f64>(&[16, 256], TimeDim::Last).unwrap())
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(parts), &tensors, |b, tensors| {
            b.iter(|| black_box(tcat(black_box(tensors)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark stacking and time-axis selection
fn bench_select_and_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural");

    let x = rand::<f64>(&[16, 4_096], TimeDim::Last).unwrap();
    let every_other: Vec<usize> = (0..x.time_len()).step_by(2).collect();
    group.bench_function("tindex_select_decimate", |b| {
        b.iter(|| black_box(tindex_select(&x, black_box(&every_other)).unwrap()));
    });

    let batch: Vec<_> = (0..16)
        .map(|_| rand::<f64>(&[8, 512], TimeDim::Last).unwrap())
        .collect();
    group.bench_function("stack_16", |b| {
        b.iter(|| black_box(stack(black_box(&batch), 0).unwrap()));
    });

    group.bench_function("permute_time_first", |b| {
        b.iter(|| black_box(x.permute(&[1, 0]).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_creation, bench_tcat, bench_select_and_stack);
criterion_main!(benches);
