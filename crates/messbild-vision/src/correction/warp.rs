// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Warp execution — hand a correction plan to the perspective-warp primitive
// and produce the rectified image.

use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use messbild_core::error::{MessbildError, Result};
use messbild_core::types::CorrectionPlan;
use tracing::{info, instrument};

/// Execute a correction plan against the original photograph.
///
/// The output canvas is the plan's target rectangle translated to the
/// origin, so the rectified subject fills the result exactly. Pixels the
/// source quadrilateral does not cover come out white.
#[instrument(skip_all)]
pub fn rectify(image: &DynamicImage, plan: &CorrectionPlan) -> Result<DynamicImage> {
    let out_w = plan.target_width().round() as u32;
    let out_h = plan.target_height().round() as u32;
    if out_w == 0 || out_h == 0 {
        return Err(MessbildError::Rectification(
            "target rectangle has zero area".into(),
        ));
    }

    let src: [(f32, f32); 4] = [
        (plan.source[0].x, plan.source[0].y),
        (plan.source[1].x, plan.source[1].y),
        (plan.source[2].x, plan.source[2].y),
        (plan.source[3].x, plan.source[3].y),
    ];

    // Target corners shifted so the rectangle starts at the origin.
    let origin_x = plan.target[0].x;
    let origin_y = plan.target[0].y;
    let dest: [(f32, f32); 4] = [
        (0.0, 0.0),
        (plan.target[1].x - origin_x, plan.target[1].y - origin_y),
        (plan.target[2].x - origin_x, plan.target[2].y - origin_y),
        (plan.target[3].x - origin_x, plan.target[3].y - origin_y),
    ];

    let projection = Projection::from_control_points(src, dest).ok_or_else(|| {
        MessbildError::Rectification(
            "source corners are degenerate; no projective transform exists".into(),
        )
    })?;

    let rgba = image.to_rgba8();
    let default_pixel = Rgba([255u8, 255, 255, 255]);
    let mut output = RgbaImage::new(out_w, out_h);
    warp_into(
        &rgba,
        &projection,
        Interpolation::Bilinear,
        default_pixel,
        &mut output,
    );

    info!(out_w, out_h, "rectification applied");
    Ok(DynamicImage::ImageRgba8(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::planner::plan_correction;
    use messbild_core::types::{DetectedQuad, Point2D};

    fn red_patch_photo() -> DynamicImage {
        let mut img = RgbaImage::from_pixel(200, 200, Rgba([0, 0, 0, 255]));
        for y in 40..160 {
            for x in 40..160 {
                img.put_pixel(x, y, Rgba([200, 10, 10, 255]));
            }
        }
        DynamicImage::ImageRgba8(img)
    }

    fn axis_aligned_quad() -> DetectedQuad {
        DetectedQuad {
            top_left: Point2D::new(40.0, 40.0),
            top_right: Point2D::new(160.0, 40.0),
            bottom_right: Point2D::new(160.0, 160.0),
            bottom_left: Point2D::new(40.0, 160.0),
            confidence: 1.0,
        }
    }

    #[test]
    fn output_matches_the_target_rectangle_size() {
        let image = red_patch_photo();
        let plan = plan_correction(&axis_aligned_quad());

        let rectified = rectify(&image, &plan).expect("rectify");
        assert_eq!(rectified.width(), 120);
        assert_eq!(rectified.height(), 120);
    }

    #[test]
    fn axis_aligned_crop_preserves_content() {
        let image = red_patch_photo();
        let plan = plan_correction(&axis_aligned_quad());

        let rectified = rectify(&image, &plan).expect("rectify").to_rgba8();
        // The centre of the output should be the red patch, not background.
        let centre = rectified.get_pixel(60, 60);
        assert!(centre.0[0] > 150 && centre.0[1] < 60, "got {:?}", centre);
    }

    #[test]
    fn degenerate_corners_are_reported_not_panicked() {
        let collinear = DetectedQuad {
            top_left: Point2D::new(0.0, 0.0),
            top_right: Point2D::new(10.0, 10.0),
            bottom_right: Point2D::new(20.0, 20.0),
            bottom_left: Point2D::new(30.0, 30.0),
            confidence: 0.1,
        };
        let plan = plan_correction(&collinear);

        let result = rectify(&red_patch_photo(), &plan);
        assert!(matches!(result, Err(MessbildError::Rectification(_))));
    }

    #[test]
    fn rectified_output_can_be_saved() {
        let image = red_patch_photo();
        let plan = plan_correction(&axis_aligned_quad());
        let rectified = rectify(&image, &plan).expect("rectify");

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rectified.png");
        rectified.save(&path).expect("save");
        assert!(path.exists());
    }
}
