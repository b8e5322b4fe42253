// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner role assignment — label a quadrilateral's vertices as
// top-left/top-right/bottom-right/bottom-left.

use messbild_core::types::{DetectedQuad, Point2D, Polygon};

/// Assign corner roles using each vertex's coordinate sum and difference.
///
/// Top-left minimises x+y and bottom-right maximises it; of the remaining
/// pair, top-right maximises x−y and bottom-left is the other. Assumes the
/// quadrilateral is rotated less than roughly 45° from axis-aligned; beyond
/// that the roles can swap, a known limitation of this heuristic.
pub fn assign_corners(polygon: &Polygon, confidence: f32) -> DetectedQuad {
    let vertices = polygon.vertices();
    debug_assert_eq!(vertices.len(), 4);

    let mut by_sum: Vec<Point2D> = vertices.to_vec();
    by_sum.sort_by(|a, b| {
        (a.x + a.y)
            .partial_cmp(&(b.x + b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let top_left = by_sum[0];
    let bottom_right = by_sum[3];

    let mut remaining = [by_sum[1], by_sum[2]];
    remaining.sort_by(|a, b| {
        (a.x - a.y)
            .partial_cmp(&(b.x - b.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let bottom_left = remaining[0];
    let top_right = remaining[1];

    DetectedQuad {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
        confidence,
    }
}
