// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge map construction — luminance conversion, Gaussian smoothing,
// two-threshold edge detection, and gap-bridging dilation.

use image::{DynamicImage, GrayImage};
use imageproc::distance_transform::Norm;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::dilate;
use messbild_core::config::DetectionConfig;
use messbild_core::error::{MessbildError, Result};
use tracing::{debug, instrument};

use crate::primitives::VisionPrimitives;

/// Binary edge mask produced from an input photograph.
///
/// White pixels mark detected edges; black pixels are background.
pub struct EdgeMap {
    pub mask: GrayImage,
}

impl EdgeMap {
    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }
}

/// Build a binary edge map suitable for contour extraction.
///
/// Smoothing suppresses sensor noise that would otherwise fragment contours;
/// the final dilation pass bridges small boundary gaps caused by lighting
/// variation. Fails only if the image has zero area.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn build_edge_map<P: VisionPrimitives>(
    image: &DynamicImage,
    primitives: &P,
    config: &DetectionConfig,
) -> Result<EdgeMap> {
    if image.width() == 0 || image.height() == 0 {
        return Err(MessbildError::InvalidImage("image has zero area".into()));
    }

    let gray = image.to_luma8();

    // Sigma matching a k×k Gaussian kernel.
    let kernel = config.blur_kernel.max(1);
    let sigma = (0.3 * ((kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8).max(0.1);
    let blurred = gaussian_blur_f32(&gray, sigma);
    debug!(kernel, sigma, "smoothing applied");

    let edges = primitives.detect_edges(&blurred, config.canny_low, config.canny_high);

    // One dilation pass bridges hairline gaps in object boundaries.
    let mask = dilate(&edges, Norm::LInf, 1);
    debug!("edge mask dilated");

    Ok(EdgeMap { mask })
}
