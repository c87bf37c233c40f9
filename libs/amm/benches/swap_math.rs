//! Swap-output formula benchmark
//!
//! The output calculation sits on the hot path of every swap; this keeps an
//! eye on it staying a handful of integer operations.

use basin_amm::ConstantProduct;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_output_amount(c: &mut Criterion) {
    c.bench_function("output_amount_small_pool", |b| {
        b.iter(|| {
            ConstantProduct::output_amount(black_box(100), black_box(1000), black_box(1000))
        })
    });

    c.bench_function("output_amount_deep_pool", |b| {
        b.iter(|| {
            ConstantProduct::output_amount(
                black_box(1_000_000_000_000u128),
                black_box(500_000_000_000_000_000u128),
                black_box(250_000_000_000_000_000u128),
            )
        })
    });
}

fn bench_spot_price(c: &mut Criterion) {
    c.bench_function("spot_price", |b| {
        b.iter(|| {
            ConstantProduct::spot_price(
                black_box(500_000_000_000_000_000u128),
                black_box(250_000_000_000_000_000u128),
            )
        })
    });
}

criterion_group!(benches, bench_output_amount, bench_spot_price);
criterion_main!(benches);
