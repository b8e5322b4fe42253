// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Candidate filtering, confidence scoring, and ranking.

use messbild_core::config::DetectionConfig;
use messbild_core::types::Polygon;
use tracing::{debug, instrument};

/// Retain only polygons that could plausibly be the photographed subject:
/// exactly four vertices, convex, and at least `min_area_fraction` of the
/// frame. Everything else is discarded silently; most raw contours are
/// noise, text blocks, or irrelevant objects, and an image may legitimately
/// yield zero survivors.
#[instrument(skip(polygons))]
pub fn filter_quads(
    polygons: Vec<Polygon>,
    image_area: f32,
    min_area_fraction: f32,
) -> Vec<Polygon> {
    let min_area = image_area * min_area_fraction;
    let kept: Vec<Polygon> = polygons
        .into_iter()
        .filter(|p| p.len() == 4 && p.is_convex() && p.area() >= min_area)
        .collect();
    debug!(kept = kept.len(), min_area, "quadrilateral filter applied");
    kept
}

/// Score a four-vertex polygon in [0, 1].
///
/// The blend deliberately favours size: a large, slightly skewed
/// quadrilateral is usually the intended subject, while a small, perfectly
/// square artefact usually is not.
pub fn score(polygon: &Polygon, image_area: f32, config: &DetectionConfig) -> f32 {
    let size_score = (polygon.area() / image_area).min(1.0);

    // Mean closeness of the interior angles to 90 degrees.
    let rectangularity = (0..polygon.len())
        .map(|i| {
            let angle = polygon.interior_angle_deg(i);
            (1.0 - (90.0 - angle).abs() / 90.0).clamp(0.0, 1.0)
        })
        .sum::<f32>()
        / polygon.len() as f32;

    let confidence =
        config.size_weight * size_score + config.rectangularity_weight * rectangularity;
    confidence.clamp(0.0, 1.0)
}

/// Sort scored candidates by confidence, highest first, and truncate to
/// `max_results`. The sort is stable, so ties keep their contour trace
/// order and results are deterministic.
pub fn rank(mut scored: Vec<(Polygon, f32)>, max_results: usize) -> Vec<(Polygon, f32)> {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(max_results);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use messbild_core::types::Point2D;

    fn quad(x: f32, y: f32, w: f32, h: f32) -> Polygon {
        Polygon::new(vec![
            Point2D::new(x, y),
            Point2D::new(x + w, y),
            Point2D::new(x + w, y + h),
            Point2D::new(x, y + h),
        ])
    }

    #[test]
    fn filter_drops_small_nonconvex_and_nonquad_polygons() {
        let triangle = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(50.0, 100.0),
        ]);
        let dented = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(20.0, 20.0),
            Point2D::new(0.0, 100.0),
        ]);
        let tiny = quad(0.0, 0.0, 5.0, 5.0);
        let keeper = quad(10.0, 10.0, 80.0, 60.0);

        let kept = filter_quads(
            vec![triangle, dented, tiny, keeper.clone()],
            100.0 * 100.0,
            0.02,
        );
        assert_eq!(kept, vec![keeper]);
    }

    #[test]
    fn score_is_within_bounds_and_favours_size() {
        let config = DetectionConfig::default();
        let image_area = 100.0 * 100.0;

        let large = quad(0.0, 0.0, 90.0, 90.0);
        let small = quad(0.0, 0.0, 20.0, 20.0);

        let large_score = score(&large, image_area, &config);
        let small_score = score(&small, image_area, &config);

        assert!((0.0..=1.0).contains(&large_score));
        assert!((0.0..=1.0).contains(&small_score));
        assert!(large_score > small_score);
    }

    #[test]
    fn perfect_right_angles_score_full_rectangularity() {
        // Full-frame rectangle: size 1.0, rectangularity 1.0.
        let config = DetectionConfig::default();
        let full = quad(0.0, 0.0, 100.0, 100.0);
        let confidence = score(&full, 100.0 * 100.0, &config);
        assert!((confidence - 1.0).abs() < 1e-4, "got {confidence}");
    }

    #[test]
    fn skew_lowers_the_rectangularity_share() {
        let config = DetectionConfig::default();
        let image_area = 200.0f32 * 200.0;

        let square = quad(0.0, 0.0, 100.0, 100.0);
        // Same area ballpark, strongly sheared corners.
        let sheared = Polygon::new(vec![
            Point2D::new(40.0, 0.0),
            Point2D::new(140.0, 0.0),
            Point2D::new(100.0, 100.0),
            Point2D::new(0.0, 100.0),
        ]);

        assert!(score(&square, image_area, &config) > score(&sheared, image_area, &config));
    }

    #[test]
    fn rank_sorts_descending_and_truncates() {
        let entries = vec![
            (quad(0.0, 0.0, 10.0, 10.0), 0.2),
            (quad(1.0, 0.0, 10.0, 10.0), 0.9),
            (quad(2.0, 0.0, 10.0, 10.0), 0.5),
            (quad(3.0, 0.0, 10.0, 10.0), 0.7),
        ];
        let ranked = rank(entries, 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].1, 0.9);
        assert_eq!(ranked[1].1, 0.7);
        assert_eq!(ranked[2].1, 0.5);
    }

    #[test]
    fn rank_keeps_trace_order_on_ties() {
        let first = quad(0.0, 0.0, 10.0, 10.0);
        let second = quad(50.0, 0.0, 10.0, 10.0);
        let ranked = rank(vec![(first.clone(), 0.5), (second, 0.5)], 5);
        assert_eq!(ranked[0].0, first);
    }

    #[test]
    fn rank_of_nothing_is_empty() {
        assert!(rank(Vec::new(), 5).is_empty());
    }
}
