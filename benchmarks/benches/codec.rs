// Copyright (c) 2025-2026 The mirage developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;

use mirage_codec::{MaskKey, MaskWord, decode, encode};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench codec
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

fn bench_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitution");
    configure_group(&mut group);

    let mut rng = rand::rng();
    let narrow: Vec<u32> = (0..1024).map(|_| rng.random()).collect();
    let wide: Vec<u64> = (0..1024).map(|_| rng.random()).collect();

    group.bench_function("u32_round_trip_1k", |b| {
        b.iter(|| {
            for word in &narrow {
                black_box(black_box(*word).substitute().desubstitute());
            }
        })
    });

    group.bench_function("u64_round_trip_1k", |b| {
        b.iter(|| {
            for word in &wide {
                black_box(black_box(*word).substitute().desubstitute());
            }
        })
    });

    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    configure_group(&mut group);

    let mut rng = rand::rng();
    let key = MaskKey::from_raw(rng.random());
    let ints: Vec<i32> = (0..1024).map(|_| rng.random()).collect();
    let longs: Vec<i64> = (0..1024).map(|_| rng.random()).collect();
    let floats: Vec<f32> = (0..1024).map(|_| rng.random()).collect();

    group.bench_function("encode_i32_1k", |b| {
        b.iter(|| {
            for value in &ints {
                black_box(encode(black_box(*value), key));
            }
        })
    });

    group.bench_function("round_trip_i32_1k", |b| {
        b.iter(|| {
            for value in &ints {
                black_box(decode::<i32>(encode(black_box(*value), key), key));
            }
        })
    });

    group.bench_function("round_trip_i64_1k", |b| {
        b.iter(|| {
            for value in &longs {
                black_box(decode::<i64>(encode(black_box(*value), key), key));
            }
        })
    });

    group.bench_function("round_trip_f32_1k", |b| {
        b.iter(|| {
            for value in &floats {
                black_box(decode::<f32>(encode(black_box(*value), key), key));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_substitution, bench_encode_decode);
criterion_main!(benches);
