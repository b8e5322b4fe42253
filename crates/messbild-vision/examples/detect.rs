// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Detect a rectangular subject in a photograph, print the ranked candidates,
// and save the rectified top candidate.
//
// Usage: cargo run --example detect -- photo.jpg [rectified.png]

use messbild_core::config::DetectionConfig;
use messbild_vision::{QuadDetector, plan_correction, rectify};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or("usage: detect <photo> [output]")?;
    let output = args.next().unwrap_or_else(|| "rectified.png".into());

    let image = image::open(&input)?;
    let result = QuadDetector::new(DetectionConfig::default()).detect(&image);

    if !result.success {
        eprintln!(
            "detection failed: {}",
            result.error_message.unwrap_or_default()
        );
        std::process::exit(1);
    }
    if result.candidates.is_empty() {
        println!("no candidates found; place the corners manually");
        return Ok(());
    }

    for (index, quad) in result.candidates.iter().enumerate() {
        println!(
            "#{index}: confidence {:.3}  TL({:.0},{:.0}) TR({:.0},{:.0}) BR({:.0},{:.0}) BL({:.0},{:.0})",
            quad.confidence,
            quad.top_left.x,
            quad.top_left.y,
            quad.top_right.x,
            quad.top_right.y,
            quad.bottom_right.x,
            quad.bottom_right.y,
            quad.bottom_left.x,
            quad.bottom_left.y,
        );
    }

    let plan = plan_correction(&result.candidates[0]);
    let rectified = rectify(&image, &plan)?;
    rectified.save(&output)?;
    println!("rectified image written to {output}");
    Ok(())
}
