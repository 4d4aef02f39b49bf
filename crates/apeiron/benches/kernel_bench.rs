//! Benchmarks for the kernel's two super-linear paths: Leibniz
//! determinant expansion and Newton-Raphson square roots.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use apeiron::prelude::*;

fn dense_matrix(n: usize) -> Matrix<Integer> {
    // deterministic, non-triangular fill so no fast path triggers
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| Integer::new(((i * 31 + j * 17 + 7) % 23) as i64 - 11))
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).unwrap()
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    for n in [4usize, 6, 8] {
        let m = dense_matrix(n);
        group.bench_function(format!("leibniz_{n}x{n}"), |b| {
            b.iter(|| black_box(&m).determinant().unwrap());
        });
        group.bench_function(format!("leibniz_parallel_{n}x{n}"), |b| {
            b.iter(|| black_box(&m).determinant_parallel().unwrap());
        });
    }
    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");
    for digits in [16u64, 64, 256] {
        let ctx = PrecisionContext::with_digits(digits, Rounding::HalfEven).unwrap();
        let value = Integer::new(2);
        group.bench_function(format!("sqrt2_{digits}_digits"), |b| {
            b.iter(|| sqrt_integer(black_box(&value), &ctx).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_determinant, bench_sqrt);
criterion_main!(benches);
