//! Indicator, geometry and normalization benchmarks.
//!
//! Run with: `cargo bench --package duochart-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use duochart_bench::{SIZES, synthetic_rows, synthetic_series};
use duochart_lib::{
    IndicatorKind, Ticker, build_candlestick_geometry, compute_indicator, compute_requested,
    normalize, prepare_chart,
};
use std::hint::black_box;

fn indicator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator");

    for size in SIZES {
        let series = synthetic_series(size);
        group.throughput(Throughput::Elements(size as u64));

        for &kind in IndicatorKind::all() {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &series, |b, series| {
                b.iter(|| compute_indicator(black_box(series), kind));
            });
        }

        let names: Vec<&str> = IndicatorKind::all().iter().map(IndicatorKind::as_str).collect();
        group.bench_with_input(BenchmarkId::new("all requested", size), &series, |b, series| {
            b.iter(|| compute_requested(black_box(series), &names));
        });
    }

    group.finish();
}

fn geometry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    for size in SIZES {
        let series = synthetic_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, series| {
            b.iter(|| build_candlestick_geometry(black_box(series)));
        });
    }

    group.finish();
}

fn normalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in SIZES {
        let rows = synthetic_rows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| normalize(black_box(rows.clone())));
        });
    }

    group.finish();
}

fn prepare_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_chart");
    let ticker: Ticker = "AAPL".parse().expect("valid ticker");
    let names = ["30 Day SMA", "100 Day SMA", "Linear Regression Line"];

    for size in SIZES {
        let rows = synthetic_rows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| prepare_chart(ticker.clone(), black_box(rows.clone()), &names));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    indicator_benchmark,
    geometry_benchmark,
    normalize_benchmark,
    prepare_benchmark
);
criterion_main!(benches);
