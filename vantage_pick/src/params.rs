// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Near-miss tolerance for polylines, in the geometry's local units.
pub const DEFAULT_LINE_PRECISION: f64 = 0.2;

/// Near-miss tolerance for point sets, in the geometry's local units.
pub const DEFAULT_POINT_PRECISION: f64 = 0.2;

/// Tolerances for thin geometry.
///
/// Lines and points have no area, so a ray almost never strikes them exactly.
/// A ray that passes within these distances counts as a hit. The values are
/// fixed constants, not derived from the camera each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickParams {
    /// Maximum ray-to-segment distance for polyline hits.
    pub line_precision: f64,
    /// Maximum ray-to-point distance for point-set hits.
    pub point_precision: f64,
}

impl Default for PickParams {
    fn default() -> Self {
        Self {
            line_precision: DEFAULT_LINE_PRECISION,
            point_precision: DEFAULT_POINT_PRECISION,
        }
    }
}
