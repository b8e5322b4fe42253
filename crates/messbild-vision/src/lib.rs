// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// messbild-vision — Quadrilateral detection and perspective-correction
// planning for Messbild.
//
// Provides the candidate detection pipeline (edge map construction, contour
// extraction, quadrilateral filtering, confidence scoring, ranking, corner
// role assignment), the correction planner, and the warp adapter that
// executes a correction plan.

pub mod correction;
pub mod detect;
pub mod primitives;

// Re-export the primary entry points so callers can use
// `messbild_vision::QuadDetector` etc.
pub use correction::planner::plan_correction;
pub use correction::warp::rectify;
pub use detect::detector::{QuadDetector, detect_in_background};
pub use primitives::{ImageprocPrimitives, VisionPrimitives};
