// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Why a pick ray could not be built.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PickError {
    /// The rendering surface has no area, so pixels cannot be normalized.
    #[error("surface has no area ({width}x{height})")]
    EmptySurface {
        /// Surface width in pixels.
        width: f64,
        /// Surface height in pixels.
        height: f64,
    },
    /// The camera produced a zero-length or non-finite ray.
    #[error("camera produced a degenerate ray")]
    DegenerateRay,
    /// The view-projection matrix cannot be inverted.
    #[error("view-projection matrix is not invertible")]
    SingularProjection,
}
