// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the rectification workflow.
//
// Every technical error is mapped to plain English with a clear suggestion.
// A failed automatic detection must always steer the user toward manual
// corner placement rather than blocking them.

use crate::error::MessbildError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Momentary hiccup; retrying is likely to succeed.
    Transient,
    /// User must do something (pick another photo, place corners by hand).
    ActionRequired,
    /// Cannot be fixed by retrying: unusable input, corrupt file, etc.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the system should offer an automatic retry.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `MessbildError` into a `HumanError` anyone can understand.
pub fn humanize_error(err: &MessbildError) -> HumanError {
    match err {
        MessbildError::InvalidImage(detail) => HumanError {
            message: "This photo can't be used.".into(),
            suggestion: format!("Choose a different photo and try again. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        MessbildError::ImageError(detail) => HumanError {
            message: "Something went wrong while reading the photo.".into(),
            suggestion: format!("Try again, or pick a different photo. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        MessbildError::Detection(_) => HumanError {
            message: "We couldn't scan the photo automatically.".into(),
            suggestion: "You can place the four corners yourself and continue.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        MessbildError::Rectification(_) => HumanError {
            message: "We couldn't straighten the photo.".into(),
            suggestion: "Adjust the corners so they outline the subject, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        MessbildError::Io(detail) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check the file still exists and try again. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        MessbildError::Serialization(detail) => HumanError {
            message: "The saved settings couldn't be read.".into(),
            suggestion: format!("Reset the detection settings to defaults. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

/// Guidance for a run that completed but found nothing.
///
/// Not an error: the detector returns success with an empty candidate list,
/// and the UI shows this notice alongside the manual placement tool.
pub fn no_candidates_notice() -> HumanError {
    HumanError {
        message: "No rectangle was found in this photo.".into(),
        suggestion: "Place the four corners yourself, or retake the photo with the whole subject visible.".into(),
        retriable: true,
        severity: Severity::ActionRequired,
    }
}
