// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Correction planning and execution for a confirmed candidate.

pub mod planner;
pub mod warp;

pub use planner::plan_correction;
pub use warp::rectify;
