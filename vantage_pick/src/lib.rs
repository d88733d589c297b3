// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_pick --heading-base-level=0

//! Vantage Pick: find the interactive object under the cursor in a 3D scene.
//!
//! Picking runs in three steps:
//!
//! 1. [`ray_from_pointer`] turns a surface-local pixel position into normalized
//!    device coordinates and asks a [`Camera`] for the world-space ray through
//!    that point.
//! 2. [`pick`] walks one or more scene roots through the [`SceneTree`] trait,
//!    intersecting the ray with every node that sits inside an interactive
//!    subtree (see [`Interest::INTERACTIVE`]).
//! 3. The nearest hit along the ray wins and is reported as a [`Hover`]: the
//!    interactive object that owns the hit plus the node whose geometry was
//!    actually struck.
//!
//! [`resolve`] chains all three and treats every failure (zero-size surface,
//! singular camera, no geometry) as "no hit".
//!
//! Geometry is supplied by the scene through [`SceneTree::hit_test`]. The
//! [`shapes`] module has ready-made [`RayHitTest`] implementations for spheres,
//! boxes, triangles, polylines and point sets; thin geometry uses the
//! tolerances in [`PickParams`].
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use vantage_pick::shapes::Sphere;
//! use vantage_pick::{Ray, RayHitTest, PickParams};
//!
//! let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z).unwrap();
//! let sphere = Sphere { center: DVec3::new(0.0, 0.0, -10.0), radius: 1.0 };
//!
//! let hit = sphere.ray_hit(&ray, &PickParams::default()).unwrap();
//! assert_eq!(hit.distance, 9.0);
//! ```
//!
//! This crate is `no_std` compatible; enable `libm` when building without `std`.

#![no_std]

extern crate alloc;

mod camera;
mod error;
mod interest;
mod params;
mod ray;
mod scene;
pub mod shapes;

pub use camera::{Camera, ViewProjection, ndc_from_pointer, ray_from_pointer};
pub use error::PickError;
pub use interest::Interest;
pub use params::{DEFAULT_LINE_PRECISION, DEFAULT_POINT_PRECISION, PickParams};
pub use ray::{HitKind, Ray, RayHit};
pub use scene::{Hover, SceneTree, pick, resolve};
pub use shapes::RayHitTest;
