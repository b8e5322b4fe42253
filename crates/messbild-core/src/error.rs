// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Messbild.

use thiserror::Error;

/// Top-level error type for all Messbild operations.
#[derive(Debug, Error)]
pub enum MessbildError {
    // -- Detection errors --
    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("detection failed: {0}")]
    Detection(String),

    // -- Correction errors --
    #[error("rectification failed: {0}")]
    Rectification(String),

    // -- Storage / plumbing --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MessbildError>;
