// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Messbild rectification tool.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one detection run.
///
/// Concurrent runs are independent; the id keeps their interleaved log
/// output attributable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point2D) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// An ordered boundary polygon, implicitly closed (the last vertex connects
/// back to the first). Vertex order defines the boundary traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon(Vec<Point2D>);

impl Polygon {
    pub fn new(vertices: Vec<Point2D>) -> Self {
        Self(vertices)
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enclosed area via the shoelace formula.
    pub fn area(&self) -> f32 {
        let n = self.0.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0f32;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.0[i].x * self.0[j].y;
            area -= self.0[j].x * self.0[i].y;
        }
        area.abs() / 2.0
    }

    /// Closed perimeter length.
    pub fn perimeter(&self) -> f32 {
        let n = self.0.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.0[i].distance_to(self.0[(i + 1) % n]))
            .sum()
    }

    /// Whether the polygon is convex: the cross product of consecutive edge
    /// vectors keeps one sign around the loop. Collinear runs are tolerated.
    pub fn is_convex(&self) -> bool {
        let n = self.0.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0.0f32;
        for i in 0..n {
            let a = self.0[i];
            let b = self.0[(i + 1) % n];
            let c = self.0[(i + 2) % n];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if cross.abs() <= f32::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Interior angle at the given vertex, in degrees. For a convex polygon
    /// the result lies in (0, 180).
    pub fn interior_angle_deg(&self, index: usize) -> f32 {
        let n = self.0.len();
        let prev = self.0[(index + n - 1) % n];
        let cur = self.0[index];
        let next = self.0[(index + 1) % n];

        let ax = prev.x - cur.x;
        let ay = prev.y - cur.y;
        let bx = next.x - cur.x;
        let by = next.y - cur.y;

        let norm = (ax * ax + ay * ay).sqrt() * (bx * bx + by * by).sqrt();
        if norm <= f32::EPSILON {
            return 0.0;
        }
        let dot = ax * bx + ay * by;
        (dot / norm).clamp(-1.0, 1.0).acos().to_degrees()
    }
}

/// A detected quadrilateral candidate with labelled corner roles.
///
/// Invariant: the corners taken in TL, TR, BR, BL order form a simple convex
/// polygon. Created once by the corner role assigner and immutable afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedQuad {
    pub top_left: Point2D,
    pub top_right: Point2D,
    pub bottom_right: Point2D,
    pub bottom_left: Point2D,
    /// Combined size/rectangularity score in [0, 1].
    pub confidence: f32,
}

impl DetectedQuad {
    /// Corners in TL, TR, BR, BL order.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Outcome of one detection run.
///
/// `candidates` is ordered by confidence, highest first. An empty list with
/// `success == true` means nothing was detected; the caller should offer
/// manual corner placement, not report an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub success: bool,
    pub candidates: Vec<DetectedQuad>,
    pub error_message: Option<String>,
}

impl DetectionResult {
    /// A completed run, with zero or more ranked candidates.
    pub fn detected(candidates: Vec<DetectedQuad>) -> Self {
        Self {
            success: true,
            candidates,
            error_message: None,
        }
    }

    /// A failed run with a human-readable reason.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            candidates: Vec::new(),
            error_message: Some(message.into()),
        }
    }
}

/// What the user chose on the candidate selection surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateSelection {
    /// The candidate at this index in `DetectionResult::candidates`.
    Candidate(usize),
    /// Manual corner placement instead of any automatic candidate.
    Manual,
}

/// Source→target correspondence handed to the perspective warp.
///
/// Both arrays are in TL, TR, BR, BL order. `target` is the axis-aligned
/// bounding rectangle of `source`. Produced once per confirmed candidate and
/// consumed once by the warp operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionPlan {
    pub source: [Point2D; 4],
    pub target: [Point2D; 4],
}

impl CorrectionPlan {
    /// Width of the target rectangle.
    pub fn target_width(&self) -> f32 {
        self.target[1].x - self.target[0].x
    }

    /// Height of the target rectangle.
    pub fn target_height(&self) -> f32 {
        self.target[3].y - self.target[0].y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_polygon(w: f32, h: f32) -> Polygon {
        Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(w, 0.0),
            Point2D::new(w, h),
            Point2D::new(0.0, h),
        ])
    }

    #[test]
    fn shoelace_area_rectangle() {
        let poly = rect_polygon(10.0, 5.0);
        assert!((poly.area() - 50.0).abs() < 1e-3, "got {}", poly.area());
    }

    #[test]
    fn perimeter_rectangle() {
        let poly = rect_polygon(10.0, 5.0);
        assert!((poly.perimeter() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn rectangle_is_convex() {
        assert!(rect_polygon(10.0, 5.0).is_convex());
    }

    #[test]
    fn chevron_is_not_convex() {
        let poly = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(5.0, 3.0), // dent
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ]);
        assert!(!poly.is_convex());
    }

    #[test]
    fn rectangle_interior_angles_are_right() {
        let poly = rect_polygon(10.0, 5.0);
        for i in 0..4 {
            assert!((poly.interior_angle_deg(i) - 90.0).abs() < 0.01);
        }
    }

    #[test]
    fn degenerate_polygon_has_zero_area() {
        let poly = Polygon::new(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 4.0)]);
        assert_eq!(poly.area(), 0.0);
        assert!(!poly.is_convex());
    }

    #[test]
    fn detection_result_constructors() {
        let ok = DetectionResult::detected(Vec::new());
        assert!(ok.success);
        assert!(ok.candidates.is_empty());
        assert!(ok.error_message.is_none());

        let failed = DetectionResult::failed("edge map exploded");
        assert!(!failed.success);
        assert_eq!(failed.error_message.as_deref(), Some("edge map exploded"));
    }

    #[test]
    fn correction_plan_target_dimensions() {
        let plan = CorrectionPlan {
            source: [
                Point2D::new(12.0, 7.0),
                Point2D::new(100.0, 9.0),
                Point2D::new(98.0, 55.0),
                Point2D::new(10.0, 52.0),
            ],
            target: [
                Point2D::new(10.0, 7.0),
                Point2D::new(100.0, 7.0),
                Point2D::new(100.0, 55.0),
                Point2D::new(10.0, 55.0),
            ],
        };
        assert!((plan.target_width() - 90.0).abs() < 1e-3);
        assert!((plan.target_height() - 48.0).abs() < 1e-3);
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }
}
