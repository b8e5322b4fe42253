// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Detection entry point — runs the candidate pipeline and converts every
// internal failure into a caller-safe result.

use image::DynamicImage;
use messbild_core::config::DetectionConfig;
use messbild_core::error::Result;
use messbild_core::types::{DetectedQuad, DetectionResult, RequestId};
use tracing::{info, info_span, instrument, warn};

use crate::detect::candidates::{filter_quads, rank, score};
use crate::detect::contour::extract_contours;
use crate::detect::corners::assign_corners;
use crate::detect::edge::build_edge_map;
use crate::primitives::{ImageprocPrimitives, VisionPrimitives};

/// Quadrilateral candidate detector.
///
/// Stateless apart from its configuration: every call to [`detect`] is an
/// independent computation with no shared mutable state, so concurrent runs
/// are safe (merely wasteful).
///
/// [`detect`]: QuadDetector::detect
pub struct QuadDetector<P: VisionPrimitives = ImageprocPrimitives> {
    config: DetectionConfig,
    primitives: P,
}

impl QuadDetector {
    /// Detector backed by the production `imageproc` adapter.
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            config,
            primitives: ImageprocPrimitives,
        }
    }
}

impl Default for QuadDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

impl<P: VisionPrimitives> QuadDetector<P> {
    /// Detector with custom vision primitives (e.g. a mock in tests).
    pub fn with_primitives(config: DetectionConfig, primitives: P) -> Self {
        Self { config, primitives }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run candidate detection on a photograph.
    ///
    /// Never lets an error escape this boundary: any internal failure becomes
    /// `success == false` with a readable message, so a failed automatic
    /// detection cannot block the manual-placement fallback. An empty
    /// candidate list with `success == true` means nothing was detected.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn detect(&self, image: &DynamicImage) -> DetectionResult {
        match self.run_pipeline(image) {
            Ok(candidates) => {
                info!(candidate_count = candidates.len(), "detection complete");
                DetectionResult::detected(candidates)
            }
            Err(err) => {
                warn!(error = %err, "detection failed");
                DetectionResult::failed(err.to_string())
            }
        }
    }

    /// The fallible pipeline behind [`detect`](QuadDetector::detect).
    fn run_pipeline(&self, image: &DynamicImage) -> Result<Vec<DetectedQuad>> {
        let edges = build_edge_map(image, &self.primitives, &self.config)?;
        let polygons = extract_contours(&edges, &self.primitives, &self.config);

        let image_area = image.width() as f32 * image.height() as f32;
        let quads = filter_quads(polygons, image_area, self.config.min_area_fraction);

        let scored: Vec<_> = quads
            .into_iter()
            .map(|polygon| {
                let confidence = score(&polygon, image_area, &self.config);
                (polygon, confidence)
            })
            .collect();
        let ranked = rank(scored, self.config.max_results);

        Ok(ranked
            .into_iter()
            .map(|(polygon, confidence)| assign_corners(&polygon, confidence))
            .collect())
    }
}

/// Run detection as a one-shot task on the blocking pool.
///
/// Detection is CPU-bound; running it off the interactive thread keeps the
/// caller responsive. There is no mid-flight cancellation: once started, a
/// run completes or fails. Each run carries a [`RequestId`] in its span so
/// interleaved concurrent runs stay attributable in logs.
pub async fn detect_in_background(
    image: DynamicImage,
    config: DetectionConfig,
) -> DetectionResult {
    let request = RequestId::new();
    let span = info_span!("detect_request", request = %request);

    let handle = tokio::task::spawn_blocking(move || {
        span.in_scope(|| QuadDetector::new(config).detect(&image))
    });

    match handle.await {
        Ok(result) => result,
        Err(err) => DetectionResult::failed(format!("detection task failed: {err}")),
    }
}
