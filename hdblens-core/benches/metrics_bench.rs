//! Criterion benchmarks for the aggregation hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hdblens_core::data::{generate, DEFAULT_COUNT, DEFAULT_SEED};
use hdblens_core::metrics::{histogram, monthly_trend, town_breakdown, MarketSummary};

fn bench_metrics(c: &mut Criterion) {
    let dataset = generate(DEFAULT_SEED, DEFAULT_COUNT);
    let per_sqm: Vec<f64> = dataset.iter().map(|tx| tx.price_per_sqm()).collect();

    c.bench_function("market_summary_1000", |b| {
        b.iter(|| MarketSummary::compute(black_box(&dataset)).unwrap())
    });

    c.bench_function("monthly_trend_1000", |b| {
        b.iter(|| monthly_trend(black_box(&dataset)))
    });

    c.bench_function("town_breakdown_1000", |b| {
        b.iter(|| town_breakdown(black_box(&dataset)))
    });

    c.bench_function("histogram_50_buckets", |b| {
        b.iter(|| histogram(black_box(&per_sqm), 50).unwrap())
    });

    c.bench_function("generate_1000", |b| {
        b.iter(|| generate(black_box(DEFAULT_SEED), black_box(DEFAULT_COUNT)))
    });
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
