// Copyright 2026 the Rotated Control Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for embedding and rotation.

use thiserror::Error;

/// Errors surfaced by [`RotatedControl`](crate::RotatedControl) and its parts.
///
/// There are no retries anywhere in this crate: every operation is a
/// deterministic synchronous computation, so any failure is a programming or
/// usage error and is surfaced immediately rather than silently defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// The control passed at construction/embed time was missing, or is
    /// already owned elsewhere and cannot be reparented.
    ///
    /// Non-recoverable locally; the caller must supply a valid control.
    #[error("invalid control: {0}")]
    InvalidControl(&'static str),

    /// A non-finite angle (NaN or ±∞) was passed.
    ///
    /// Normalization rejects these rather than silently producing a
    /// degenerate transform.
    #[error("rotation angle must be finite, got {0}")]
    DegenerateAngle(f64),
}
