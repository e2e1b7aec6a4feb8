// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_region::{LatLng, Ring, ring_contains};

/// A regular polygon with `n` vertices around `(5, 5)`.
fn polygon(n: u32) -> Ring {
    (0..n)
        .map(|i| {
            let t = TAU * f64::from(i) / f64::from(n);
            LatLng::new(5.0 + 4.0 * t.sin(), 5.0 + 4.0 * t.cos())
        })
        .collect()
}

fn bench_contains_by_vertex_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment/vertices");
    let inside = LatLng::new(5.3, 4.8);

    // Hypothesis: linear in vertex count; the bounds check is constant.
    for n in [4_u32, 16, 64, 256] {
        let ring = polygon(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("ring_contains", n), &ring, |b, ring| {
            b.iter(|| ring_contains(black_box(ring.vertices()), black_box(inside)));
        });
        group.bench_with_input(BenchmarkId::new("Ring::contains", n), &ring, |b, ring| {
            b.iter(|| black_box(ring).contains(black_box(inside)));
        });
    }

    group.finish();
}

fn bench_bounds_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment/outside");
    let outside = LatLng::new(40.0, -12.0);

    // Far-away points should cost the same regardless of ring size.
    for n in [16_u32, 256] {
        let ring = polygon(n);
        group.bench_with_input(BenchmarkId::new("Ring::contains", n), &ring, |b, ring| {
            b.iter(|| black_box(ring).contains(black_box(outside)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contains_by_vertex_count, bench_bounds_rejection);
criterion_main!(benches);
