// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the messbild-vision crate. Currently benchmarks
// candidate detection on a small synthetic document photo.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, GrayImage, Luma};

use messbild_core::config::DetectionConfig;
use messbild_vision::QuadDetector;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark detection on a 200x200 synthetic grayscale image.
///
/// Creates a dark image with one bright rectangle (the same pattern used in
/// the detector unit tests) and runs the full candidate pipeline: edge map,
/// contour extraction, filtering, scoring, ranking, and corner assignment.
fn bench_detection(c: &mut Criterion) {
    let (width, height) = (200u32, 200u32);
    let mut img = GrayImage::from_pixel(width, height, Luma([30u8]));
    for y in 40..160 {
        for x in 30..170 {
            img.put_pixel(x, y, Luma([240u8]));
        }
    }
    let dynamic = DynamicImage::ImageLuma8(img);
    let detector = QuadDetector::new(DetectionConfig::default());

    c.bench_function("quad_detection (200x200)", |b| {
        b.iter(|| {
            let result = detector.detect(black_box(&dynamic));
            black_box(result);
        });
    });
}

criterion_group!(benches, bench_detection);
criterion_main!(benches);
