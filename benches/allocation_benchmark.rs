// ============================================================================
// Allocation Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Even splits - Equal ratios, remainder spread across ties
// 2. Weighted splits - Mixed decimal ratios
// 3. Arithmetic - Multiply/divide with exact integer rounding
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fair_money::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

// ============================================================================
// Even Split Benchmarks
// ============================================================================

fn benchmark_allocate_evenly(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_evenly");
    let money = Money::from_minor(1_000_003, 2).unwrap();

    for parts in [2usize, 10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(parts), parts, |b, &parts| {
            b.iter(|| black_box(money.allocate_to(parts).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Weighted Split Benchmarks
// ============================================================================

fn benchmark_allocate_weighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_weighted");
    let money = Money::from_minor(987_654_321, 2).unwrap();

    for count in [3usize, 30, 300].iter() {
        let ratios: Vec<Decimal> = (0..*count)
            .map(|i| Decimal::new((i as i64 % 17) + 1, (i % 3) as u32))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &ratios, |b, ratios| {
            b.iter(|| black_box(money.allocate(ratios).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_multiply_divide(c: &mut Criterion) {
    let money = Money::from_minor(123_456_789, 2).unwrap();
    let rate = Decimal::new(1_075, 3);

    c.bench_function("multiply_half_even", |b| {
        b.iter(|| black_box(money.multiply(black_box(rate), RoundingMode::HalfEven).unwrap()));
    });

    c.bench_function("divide_half_up", |b| {
        b.iter(|| black_box(money.divide(black_box(rate), RoundingMode::HalfUp).unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_allocate_evenly,
    benchmark_allocate_weighted,
    benchmark_multiply_divide,
);
criterion_main!(benches);
