#![allow(clippy::unwrap_used, missing_docs)]
//! Benchmark for framebuffer operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn framebuffer_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_clear");

    for (width, height) in [(800, 600), (1920, 1080), (3840, 2160)] {
        let mut fb = Framebuffer::new(width, height).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    fb.clear(black_box(Rgba::RED));
                });
            },
        );
    }

    group.finish();
}

fn framebuffer_sink_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_sink");

    let mut fb = Framebuffer::new(800, 600).unwrap();
    fb.clear(Rgba::WHITE);

    group.bench_function("write_800x600", |b| {
        b.iter(|| {
            for y in 0..600 {
                for x in 0..800 {
                    fb.write(black_box(Xy::new(x, y)), Rgba::RED);
                }
            }
        });
    });

    // Every write lands outside and must be dropped
    group.bench_function("write_offscreen", |b| {
        b.iter(|| {
            for i in 0..10_000 {
                fb.write(black_box(Xy::new(-1 - i, i)), Rgba::RED);
            }
        });
    });

    group.finish();
}

fn framebuffer_export_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_export");

    // 100 px rows carry 48 bytes of padding each
    let mut fb = Framebuffer::new(100, 1000).unwrap();
    fb.clear(Rgba::BLUE);

    group.bench_function("to_compact_pixels_100x1000", |b| {
        b.iter(|| black_box(fb.to_compact_pixels()));
    });

    group.bench_function("count_color_100x1000", |b| {
        b.iter(|| black_box(fb.count_color(black_box(Rgba::BLUE))));
    });

    group.finish();
}

criterion_group!(
    benches,
    framebuffer_clear_benchmark,
    framebuffer_sink_benchmark,
    framebuffer_export_benchmark
);
criterion_main!(benches);
