// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;

/// A world-space half-line.
///
/// `direction` is unit length, so ray parameters are distances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: DVec3,
    /// Unit direction.
    pub direction: DVec3,
}

impl Ray {
    /// Builds a ray, normalizing `direction`.
    ///
    /// Returns `None` for a zero-length or non-finite direction, or a
    /// non-finite origin.
    #[must_use]
    pub fn new(origin: DVec3, direction: DVec3) -> Option<Self> {
        if !origin.is_finite() {
            return None;
        }
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// What kind of primitive a hit landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitKind {
    /// A closed surface or solid.
    Surface,
    /// A line segment, within the line tolerance.
    Line,
    /// A point, within the point tolerance.
    Point,
}

/// Result of intersecting a ray with one piece of geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance along the ray; smaller is nearer.
    pub distance: f64,
    /// World-space point that was hit. For lines and points this lies on the
    /// primitive, which may be slightly off the ray.
    pub point: DVec3,
    /// Primitive kind.
    pub kind: HitKind,
    /// Segment, triangle or point index within the geometry, when meaningful.
    pub index: Option<usize>,
}

impl RayHit {
    /// A surface hit at distance `t` along `ray`.
    #[must_use]
    pub fn surface(ray: &Ray, t: f64) -> Self {
        Self {
            distance: t,
            point: ray.at(t),
            kind: HitKind::Surface,
            index: None,
        }
    }

    /// Attach a primitive index.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Keep whichever of `self` and `other` is nearer; ties keep `self`.
    #[must_use]
    pub fn nearer(self, other: Option<Self>) -> Self {
        match other {
            Some(o) if o.distance < self.distance => o,
            _ => self,
        }
    }
}
