// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ray intersection helpers for common bounding geometry.
//!
//! Small building blocks, not a mesh engine.
//! Scenes compose them inside [`SceneTree::hit_test`](crate::SceneTree::hit_test)
//! however their nodes store geometry. All shapes are expressed in the space
//! of the ray they are tested against; wrap them in [`Transformed`] to test
//! local-space geometry against a world-space ray.

use alloc::vec::Vec;

use glam::{DAffine3, DVec3};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{HitKind, PickParams, Ray, RayHit};

/// Geometry that can be intersected with a ray.
pub trait RayHitTest {
    /// The nearest intersection in front of the ray origin, if any.
    fn ray_hit(&self, ray: &Ray, params: &PickParams) -> Option<RayHit>;
}

/// A sphere, the usual bounding volume for markers and handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// Center.
    pub center: DVec3,
    /// Radius.
    pub radius: f64,
}

impl RayHitTest for Sphere {
    fn ray_hit(&self, ray: &Ray, _: &PickParams) -> Option<RayHit> {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        // Origin inside the sphere: report the exit point.
        let t = if -b - root >= 0.0 { -b - root } else { -b + root };
        (t >= 0.0).then(|| RayHit::surface(ray, t))
    }
}

/// An axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl RayHitTest for Aabb {
    fn ray_hit(&self, ray: &Ray, _: &PickParams) -> Option<RayHit> {
        let mut t_near = f64::NEG_INFINITY;
        let mut t_far = f64::INFINITY;
        for axis in 0..3 {
            let (o, d) = (ray.origin[axis], ray.direction[axis]);
            let (lo, hi) = (self.min[axis], self.max[axis]);
            // Parallel to this slab: inside or never.
            if d == 0.0 {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (t1, t2) = ((lo - o) / d, (hi - o) / d);
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }
        if t_far < t_near.max(0.0) {
            return None;
        }
        let t = if t_near >= 0.0 { t_near } else { t_far };
        Some(RayHit::surface(ray, t))
    }
}

/// A double-sided triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [DVec3; 3]);

impl RayHitTest for Triangle {
    fn ray_hit(&self, ray: &Ray, _: &PickParams) -> Option<RayHit> {
        let [a, b, c] = self.0;
        let e1 = b - a;
        let e2 = c - a;
        let p = ray.direction.cross(e2);
        let det = e1.dot(p);
        if det.abs() < f64::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let s = ray.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(e1);
        let v = ray.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = e2.dot(q) * inv_det;
        (t >= 0.0).then(|| RayHit::surface(ray, t))
    }
}

/// A connected strip of line segments.
///
/// A segment is hit when the ray passes within
/// [`PickParams::line_precision`] of it. The reported point lies on the
/// segment and the index is the segment's start vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    /// Vertices in order.
    pub points: Vec<DVec3>,
}

impl RayHitTest for Polyline {
    fn ray_hit(&self, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        let limit_sq = params.line_precision * params.line_precision;
        let mut best: Option<RayHit> = None;
        for (i, pair) in self.points.windows(2).enumerate() {
            let (t, on_segment, dist_sq) = closest_ray_segment(ray, pair[0], pair[1]);
            if dist_sq > limit_sq {
                continue;
            }
            let hit = RayHit {
                distance: t,
                point: on_segment,
                kind: HitKind::Line,
                index: Some(i),
            };
            best = Some(match best {
                Some(b) => b.nearer(Some(hit)),
                None => hit,
            });
        }
        best
    }
}

/// A cloud of points.
///
/// A point is hit when the ray passes within
/// [`PickParams::point_precision`] of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    /// The points.
    pub points: Vec<DVec3>,
}

impl RayHitTest for PointSet {
    fn ray_hit(&self, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        let limit_sq = params.point_precision * params.point_precision;
        let mut best: Option<RayHit> = None;
        for (i, &p) in self.points.iter().enumerate() {
            let t = (p - ray.origin).dot(ray.direction);
            if t < 0.0 || ray.at(t).distance_squared(p) > limit_sq {
                continue;
            }
            let hit = RayHit {
                distance: t,
                point: p,
                kind: HitKind::Point,
                index: Some(i),
            };
            best = Some(match best {
                Some(b) => b.nearer(Some(hit)),
                None => hit,
            });
        }
        best
    }
}

/// Local-space geometry placed in the world by an affine transform.
///
/// The ray is carried into local space for the test, so line and point
/// tolerances are measured in the geometry's own units.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformed<G> {
    /// Local → world transform.
    pub world_from_local: DAffine3,
    /// The local-space geometry.
    pub geometry: G,
}

impl<G: RayHitTest> RayHitTest for Transformed<G> {
    fn ray_hit(&self, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        let local_from_world = self.world_from_local.inverse();
        let local_ray = Ray::new(
            local_from_world.transform_point3(ray.origin),
            local_from_world.transform_vector3(ray.direction),
        )?;
        let local = self.geometry.ray_hit(&local_ray, params)?;
        let point = self.world_from_local.transform_point3(local.point);
        Some(RayHit {
            distance: (point - ray.origin).dot(ray.direction),
            point,
            ..local
        })
    }
}

impl<G: RayHitTest + ?Sized> RayHitTest for &G {
    fn ray_hit(&self, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        (**self).ray_hit(ray, params)
    }
}

/// Closest approach between a ray and the segment `a..b`.
///
/// Returns the ray parameter, the closest point on the segment, and the
/// squared distance between the two closest points.
fn closest_ray_segment(ray: &Ray, a: DVec3, b: DVec3) -> (f64, DVec3, f64) {
    let v = b - a;
    let w0 = ray.origin - a;
    let len_sq = v.length_squared();
    if len_sq == 0.0 {
        let t = (-w0.dot(ray.direction)).max(0.0);
        return (t, a, ray.at(t).distance_squared(a));
    }

    // Direction is unit length, so the ray's own squared length term is 1.
    let bb = ray.direction.dot(v);
    let dd = ray.direction.dot(w0);
    let ee = v.dot(w0);
    let denom = len_sq - bb * bb;

    let mut s = if denom > f64::EPSILON * len_sq {
        ((ee - bb * dd) / denom).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut t = s * bb - dd;
    if t < 0.0 {
        t = 0.0;
        s = (ee / len_sq).clamp(0.0, 1.0);
    }

    let on_segment = a + v * s;
    (t, on_segment, ray.at(t).distance_squared(on_segment))
}
