// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pluggable computer-vision primitives.
//
// The detection pipeline needs exactly three operations from an image
// library: edge detection, contour tracing, and polygon approximation. The
// trait keeps the pipeline library-agnostic; production uses the `imageproc`
// adapter, tests can substitute a mock.

use image::GrayImage;
use imageproc::contours::BorderType;
use messbild_core::types::{Point2D, Polygon};

/// The image-library primitives the detection pipeline depends on.
pub trait VisionPrimitives {
    /// Two-threshold gradient edge detection producing a binary mask
    /// (white = edge).
    fn detect_edges(&self, image: &GrayImage, low: f32, high: f32) -> GrayImage;

    /// Trace closed outer boundaries in a binary edge mask, in trace order.
    /// Nested boundaries (holes, and contours inside other contours) are
    /// discarded.
    fn trace_contours(&self, edges: &GrayImage) -> Vec<Vec<Point2D>>;

    /// Simplify a closed boundary to fewer vertices with the given tolerance
    /// in pixels.
    fn approximate_polygon(&self, contour: &[Point2D], epsilon: f64) -> Polygon;
}

/// Production adapter backed by the `imageproc` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageprocPrimitives;

impl VisionPrimitives for ImageprocPrimitives {
    fn detect_edges(&self, image: &GrayImage, low: f32, high: f32) -> GrayImage {
        imageproc::edges::canny(image, low, high)
    }

    fn trace_contours(&self, edges: &GrayImage) -> Vec<Vec<Point2D>> {
        let contours: Vec<imageproc::contours::Contour<u32>> =
            imageproc::contours::find_contours(edges);

        contours
            .into_iter()
            .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
            .map(|c| {
                c.points
                    .into_iter()
                    .map(|p| Point2D::new(p.x as f32, p.y as f32))
                    .collect()
            })
            .collect()
    }

    fn approximate_polygon(&self, contour: &[Point2D], epsilon: f64) -> Polygon {
        // Contour coordinates originate on the pixel grid, so rounding to
        // integers is lossless and Douglas-Peucker returns a subset of the
        // original points.
        let points: Vec<imageproc::point::Point<i32>> = contour
            .iter()
            .map(|p| imageproc::point::Point::new(p.x.round() as i32, p.y.round() as i32))
            .collect();

        let approx = imageproc::geometry::approximate_polygon_dp(&points, epsilon, true);

        Polygon::new(
            approx
                .into_iter()
                .map(|p| Point2D::new(p.x as f32, p.y as f32))
                .collect(),
        )
    }
}
