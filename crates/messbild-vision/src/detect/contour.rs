// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contour extraction — closed outer boundaries, each simplified to a
// low-vertex polygon.

use messbild_core::config::DetectionConfig;
use messbild_core::types::{Point2D, Polygon};
use tracing::{debug, instrument};

use crate::detect::edge::EdgeMap;
use crate::primitives::VisionPrimitives;

/// Extract simplified boundary polygons from an edge map, in trace order.
///
/// Only outer boundaries are kept: nested edges from printed text and other
/// interior detail are noise at this stage. The simplification tolerance is
/// proportional to each contour's own perimeter, so large and small
/// candidates are approximated consistently.
#[instrument(skip_all)]
pub fn extract_contours<P: VisionPrimitives>(
    edges: &EdgeMap,
    primitives: &P,
    config: &DetectionConfig,
) -> Vec<Polygon> {
    let traced = primitives.trace_contours(&edges.mask);
    debug!(contour_count = traced.len(), "outer contours traced");

    let mut polygons = Vec::new();
    for contour in traced {
        if contour.len() < 3 {
            continue;
        }
        let epsilon = f64::from(closed_perimeter(&contour)) * f64::from(config.simplify_epsilon);
        let polygon = primitives.approximate_polygon(&contour, epsilon);
        if !polygon.is_empty() {
            polygons.push(polygon);
        }
    }

    debug!(polygon_count = polygons.len(), "contours simplified");
    polygons
}

/// Perimeter of a closed point sequence.
fn closed_perimeter(points: &[Point2D]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].distance_to(points[(i + 1) % n]))
        .sum()
}
