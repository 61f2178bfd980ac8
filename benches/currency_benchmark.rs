// ============================================================================
// Transit Currency Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - Numeric and alphabetic code resolution
// 2. Addition - Same, multiple and coprime divisors
// 3. Name Lookups - Currency and country display names
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use transit_currency::prelude::*;

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let registry = CurrencyRegistry::iso4217();

    group.bench_function("numeric_known", |b| {
        b.iter(|| black_box(CurrencyValue::new(black_box(1234), black_box(36), None, &registry)))
    });

    group.bench_function("numeric_unknown", |b| {
        b.iter(|| black_box(CurrencyValue::new(black_box(1234), black_box(9999), None, &registry)))
    });

    group.bench_function("alphabetic", |b| {
        b.iter(|| black_box(CurrencyValue::new(black_box(1234), black_box("AUD"), None, &registry)))
    });

    group.finish();
}

// ============================================================================
// Addition Benchmarks
// Covers each divisor reconciliation path
// ============================================================================

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    let cases = [
        ("same_divisor", (1, 100), (5, 100)),
        ("multiple_divisor", (1, 2), (5, 10)),
        ("coprime_divisor", (1, 7), (5, 10)),
    ];

    for (name, (a_amount, a_div), (b_amount, b_div)) in cases {
        let a = CurrencyValue::xxx_with_divisor(a_amount, a_div).unwrap();
        let b = CurrencyValue::xxx_with_divisor(b_amount, b_div).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a.checked_add(b)))
        });
    }

    group.bench_function("sum_1000_fares", |b| {
        let fares: Vec<_> = (0..1000)
            .map(|i| {
                let divisor = if i % 2 == 0 { 100 } else { 1000 };
                CurrencyValue::xxx_with_divisor(-(i % 500), divisor).unwrap()
            })
            .collect();

        b.iter(|| {
            black_box(
                fares
                    .iter()
                    .try_fold(CurrencyValue::xxx(0), |acc, fare| acc.checked_add(fare)),
            )
        })
    });

    group.finish();
}

// ============================================================================
// Name Lookup Benchmarks
// ============================================================================

fn benchmark_name_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_lookups");
    let resolver = NameResolver::bundled();

    for locale in [Locale::english(), Locale::russian()] {
        group.bench_with_input(
            BenchmarkId::new("currency_by_code", locale),
            &locale,
            |b, locale| b.iter(|| black_box(resolver.currency_name_by_code(black_box(840), locale))),
        );

        group.bench_with_input(
            BenchmarkId::new("country_by_code", locale),
            &locale,
            |b, locale| b.iter(|| black_box(resolver.country_code_to_name(black_box(756), locale))),
        );
    }

    group.bench_function("currency_by_code_missing", |b| {
        let en = Locale::english();
        b.iter(|| black_box(resolver.currency_name_by_code(black_box(5), &en)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_addition,
    benchmark_name_lookups
);
criterion_main!(benches);
