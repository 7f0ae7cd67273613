//! Benchmarks for vecspace operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vecspace_bench::{sample_3d, sample_nd};
use vecspace_core::{AngleUnit, DivisionMode};
use vecspace_math::{Vector, Vector3D};

/// Benchmark shared operations on N-component vectors of growing length.
fn bench_nd(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_nd");

    for size in [3usize, 64, 1024, 16384].iter() {
        let a = sample_nd(*size);
        let b = a.negate().unwrap().multiply_by_scalar(0.5).unwrap();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("add_to", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a).add_to(black_box(*b)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("dot_product", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a).dot_product(black_box(*b)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("angle_with", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a).angle_with(black_box(*b), AngleUnit::Degree).unwrap())
        });

        group.bench_with_input(
            BenchmarkId::new("vector_projection_on", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a).vector_projection_on(black_box(*b)).unwrap())
            },
        );

        group.bench_with_input(BenchmarkId::new("divide_into_external", size), &a, |bench, a| {
            bench.iter(|| black_box(a).divide_into(2.0, DivisionMode::External).unwrap())
        });
    }

    group.finish();
}

/// Benchmark 3D-only operations over a batch.
fn bench_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_3d");

    let batch = sample_3d(10000);
    group.throughput(Throughput::Elements(batch.len() as u64));

    group.bench_function("cross_product", |b| {
        b.iter(|| {
            batch
                .windows(2)
                .map(|w| w[0].cross_product(black_box(&w[1])).unwrap())
                .collect::<Vec<Vector3D>>()
        })
    });

    group.bench_function("distance_with", |b| {
        b.iter(|| {
            batch
                .windows(2)
                .map(|w| w[0].distance_with(black_box(&w[1])).unwrap())
                .sum::<f64>()
        })
    });

    group.bench_function("print_formatted", |b| {
        b.iter(|| {
            batch
                .iter()
                .take(1000)
                .map(|v| v.print_formatted(black_box(2)).unwrap())
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_nd, bench_3d);
criterion_main!(benches);
