// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Correction planning — derive the axis-aligned target rectangle and the
// four-point correspondence handed to the perspective warp.

use messbild_core::types::{CorrectionPlan, DetectedQuad, Point2D};

/// Derive the warp correspondence for a confirmed candidate.
///
/// The target rectangle is the axis-aligned bounding box of the four source
/// corners, so the rectified subject keeps roughly its photographed scale.
/// Pure function; no pixel resampling happens here.
pub fn plan_correction(quad: &DetectedQuad) -> CorrectionPlan {
    let source = quad.corners();

    let min_x = source.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = source.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = source.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = source.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let target = [
        Point2D::new(min_x, min_y),
        Point2D::new(max_x, min_y),
        Point2D::new(max_x, max_y),
        Point2D::new(min_x, max_y),
    ];

    CorrectionPlan { source, target }
}
