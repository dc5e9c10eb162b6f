// ============================================================================
// Division Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Operand Length - Long division as digit counts grow
// 2. Radix - Same magnitude in base 10 versus base 65536
// 3. Observer Overhead - Plain division versus a statistics observer
// 4. Decimal Comparison - Short quotients against rust_decimal
// ============================================================================

use arbitrary_division::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use std::hint::black_box;

/// Deterministic operand with `len` digits, leading digit nonzero.
fn operand(len: usize, base: u32, seed: u64) -> FixedPoint {
    let mut state = seed;
    let digits: Vec<u16> = (0..len)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let d = ((state >> 33) % u64::from(base)) as u16;
            if i == 0 && d == 0 {
                1
            } else {
                d
            }
        })
        .collect();
    FixedPoint::from_digits(&digits, len, Sign::Positive, base).unwrap()
}

// ============================================================================
// Operand Length
// Quotient work grows with (dividend - divisor) * divisor digits
// ============================================================================

fn benchmark_operand_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("division_by_length");

    for num_digits in [16, 64, 256, 1024].iter() {
        let numerator = operand(*num_digits * 2, 10, 1);
        let denominator = operand(*num_digits, 10, 2);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_digits),
            &(&numerator, &denominator),
            |b, (numerator, denominator)| {
                b.iter(|| black_box(divide(numerator, denominator, 10, 0).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Radix
// A base-65536 digit carries about 4.8 decimal digits
// ============================================================================

fn benchmark_radix(c: &mut Criterion) {
    let mut group = c.benchmark_group("division_by_radix");

    for (base, num_digits) in [(10u32, 480usize), (65536u32, 100usize)].iter() {
        let numerator = operand(*num_digits, *base, 3);
        let denominator = operand(*num_digits / 2, *base, 4);

        group.bench_with_input(
            BenchmarkId::from_parameter(base),
            &(&numerator, &denominator, *base),
            |b, (numerator, denominator, base)| {
                b.iter(|| black_box(divide(numerator, denominator, *base, 0).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Observer Overhead
// ============================================================================

fn benchmark_observer_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("observer_overhead");
    let numerator = operand(256, 10, 5);
    let denominator = operand(64, 10, 6);

    group.bench_function("NoOp", |b| {
        b.iter(|| black_box(divide(&numerator, &denominator, 10, 32).unwrap()));
    });

    group.bench_function("Stats", |b| {
        b.iter(|| {
            let mut stats = DivisionStats::new();
            black_box(divide_observed(&numerator, &denominator, 10, 32, &mut stats).unwrap());
            black_box(stats)
        });
    });

    group.finish();
}

// ============================================================================
// Decimal Comparison
// Operands small enough for rust_decimal's 96-bit mantissa
// ============================================================================

fn benchmark_decimal_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_comparison");

    let a = Decimal::new(123_456_789_012, 4);
    let b = Decimal::new(7_654_321, 3);
    let x = FixedPoint::from_decimal(a).unwrap();
    let y = FixedPoint::from_decimal(b).unwrap();

    group.bench_function("FixedPoint", |bench| {
        bench.iter(|| black_box(divide(&x, &y, 10, 12).unwrap()));
    });

    group.bench_function("rust_decimal", |bench| {
        bench.iter(|| black_box(a / b));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_operand_length,
    benchmark_radix,
    benchmark_observer_overhead,
    benchmark_decimal_comparison,
);
criterion_main!(benches);
