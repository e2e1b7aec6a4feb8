// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_region::{CandidatePoint, LatLng, LayerSetTracker, Ring, SelectionController};

fn pool(side: u32) -> Vec<CandidatePoint<u32>> {
    (0..side * side)
        .map(|i| {
            let lat = f64::from(i / side) * 10.0 / f64::from(side);
            let lng = f64::from(i % side) * 10.0 / f64::from(side);
            CandidatePoint::new(i, LatLng::new(lat, lng))
        })
        .collect()
}

fn lasso(offset: f64) -> Ring {
    [(1.0, 1.0), (1.5, 8.0), (6.0, 9.0), (8.5, 4.0), (5.0, 2.5)]
        .into_iter()
        .map(|(lat, lng)| LatLng::new(lat + offset, lng))
        .collect()
}

fn bench_edit_layer(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute/edit_layer");

    // Each edit rescans the whole pool.
    for side in [32_u32, 64, 128] {
        let pool = pool(side);
        group.throughput(Throughput::Elements(pool.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pool.len()), &pool, |b, pool| {
            let mut tracker = LayerSetTracker::new();
            tracker.add_layer(0_u8, lasso(0.0), pool);
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let ring = lasso(if flip { 0.5 } else { 0.0 });
                black_box(tracker.edit_layer(0, ring, pool).len());
            });
        });
    }

    group.finish();
}

fn bench_union_many_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute/publish");
    let pool = pool(64);

    // Overlapping layers stress the id de-duplication in the union.
    for layers in [1_u32, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(layers), &layers, |b, &layers| {
            b.iter_batched(
                || SelectionController::new(|_: &[CandidatePoint<u32>], _: usize| {}),
                |mut regions| {
                    for id in 0..layers {
                        regions.add_layer(id, lasso(f64::from(id) * 0.1), &pool);
                    }
                    black_box(regions.count());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edit_layer, bench_union_many_layers);
criterion_main!(benches);
