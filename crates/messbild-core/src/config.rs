// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Detection configuration.

use serde::{Deserialize, Serialize};

/// Tuning parameters for quadrilateral candidate detection.
///
/// Passed explicitly into the detection entry point; there are no hidden
/// process-wide constants. The defaults are tuned for photographs of
/// documents, signs, and whiteboards taken at arm's length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Gaussian smoothing kernel size in pixels (k×k, default 5).
    pub blur_kernel: u32,
    /// Lower hysteresis threshold for edge detection, on an 8-bit luminance
    /// scale (default 50).
    pub canny_low: f32,
    /// Upper hysteresis threshold for edge detection (default 150).
    pub canny_high: f32,
    /// Polygon simplification tolerance as a fraction of each contour's own
    /// perimeter (default 0.02).
    pub simplify_epsilon: f32,
    /// Minimum candidate area as a fraction of the image area (default 0.02).
    /// Smaller shapes are assumed to be noise or irrelevant objects.
    pub min_area_fraction: f32,
    /// Weight of the relative-size score in the confidence blend (default 0.6).
    pub size_weight: f32,
    /// Weight of the rectangularity score in the confidence blend (default 0.4).
    pub rectangularity_weight: f32,
    /// Maximum number of ranked candidates returned (default 5).
    pub max_results: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            blur_kernel: 5,
            canny_low: 50.0,
            canny_high: 150.0,
            simplify_epsilon: 0.02,
            min_area_fraction: 0.02,
            size_weight: 0.6,
            rectangularity_weight: 0.4,
            max_results: 5,
        }
    }
}
