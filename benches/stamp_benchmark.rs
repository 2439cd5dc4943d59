#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for disc stamping and thick-line rasterization.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use terrain_raster::prelude::*;

fn stamp_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stamp_circle");
    let mut field = HeightField::new(512, 512).expect("field creation should succeed");

    for radius in [0u32, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| {
                stamp_circle(&mut field, black_box(Point::new(256, 256)), radius, 0.8)
                    .expect("stamp should succeed");
            });
        });
    }

    group.finish();
}

fn segment_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_segment");
    let mut field = HeightField::new(1024, 1024).expect("field creation should succeed");

    // Shallow, steep and diagonal walks across the field
    let cases = [
        ("shallow", Point::new(0, 100), Point::new(1023, 400)),
        ("steep", Point::new(100, 0), Point::new(400, 1023)),
        ("diagonal", Point::new(0, 0), Point::new(1023, 1023)),
    ];

    for radius in [0u32, 2, 10] {
        for (name, a, b) in cases {
            group.bench_with_input(
                BenchmarkId::new(name, radius),
                &radius,
                |bench, &radius| {
                    bench.iter(|| {
                        draw_segment(&mut field, black_box(a), black_box(b), radius, 1.0)
                            .expect("segment should succeed");
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, stamp_benchmark, segment_benchmark);
criterion_main!(benches);
