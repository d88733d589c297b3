// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor → normalized device coordinates → world-space ray.

use glam::{DMat4, DVec2, DVec3};
use kurbo::{Point, Size};

use crate::{PickError, Ray};

/// The projection collaborator: anything that can unproject NDC into world space.
pub trait Camera {
    /// World-space eye position.
    fn position(&self) -> DVec3;

    /// Map a point in normalized device coordinates back to world space.
    fn unproject(&self, ndc: DVec3) -> DVec3;

    /// The pick ray through `ndc`.
    ///
    /// The default runs from [`Camera::position`] toward the unprojected point
    /// at NDC depth `0.5`, which is correct for perspective projections.
    /// Orthographic cameras should override this.
    fn ray(&self, ndc: DVec2) -> Option<Ray> {
        let eye = self.position();
        let target = self.unproject(ndc.extend(0.5));
        Ray::new(eye, target - eye)
    }
}

/// A camera described by view and projection matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewProjection {
    position: DVec3,
    inverse_view_projection: DMat4,
}

impl ViewProjection {
    /// Build from a world→view matrix and a view→clip matrix.
    pub fn new(view: DMat4, projection: DMat4) -> Result<Self, PickError> {
        let view_projection = projection * view;
        let det = view_projection.determinant();
        if det == 0.0 || !det.is_finite() || view.determinant() == 0.0 {
            return Err(PickError::SingularProjection);
        }
        Ok(Self {
            position: view.inverse().w_axis.truncate(),
            inverse_view_projection: view_projection.inverse(),
        })
    }

    /// A right-handed perspective camera at `eye` looking at `target`.
    pub fn look_at_perspective(
        eye: DVec3,
        target: DVec3,
        up: DVec3,
        fov_y_radians: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Result<Self, PickError> {
        Self::new(
            DMat4::look_at_rh(eye, target, up),
            DMat4::perspective_rh(fov_y_radians, aspect, near, far),
        )
    }
}

impl Camera for ViewProjection {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn unproject(&self, ndc: DVec3) -> DVec3 {
        self.inverse_view_projection.project_point3(ndc)
    }
}

/// Convert a surface-local pixel position to normalized device coordinates.
///
/// The surface's top-left pixel maps to `(-1, 1)` and bottom-right to `(1, -1)`.
pub fn ndc_from_pointer(pointer: Point, surface: Size) -> Result<DVec2, PickError> {
    if !(surface.width > 0.0 && surface.height > 0.0) {
        return Err(PickError::EmptySurface {
            width: surface.width,
            height: surface.height,
        });
    }
    Ok(DVec2::new(
        (pointer.x / surface.width) * 2.0 - 1.0,
        -(pointer.y / surface.height) * 2.0 + 1.0,
    ))
}

/// The world-space pick ray under `pointer`.
pub fn ray_from_pointer(
    pointer: Point,
    surface: Size,
    camera: &(impl Camera + ?Sized),
) -> Result<Ray, PickError> {
    let ndc = ndc_from_pointer(pointer, surface)?;
    camera.ray(ndc).ok_or(PickError::DegenerateRay)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Size = Size::new(800.0, 600.0);

    fn camera() -> ViewProjection {
        ViewProjection::look_at_perspective(
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::ZERO,
            DVec3::Y,
            core::f64::consts::FRAC_PI_2,
            800.0 / 600.0,
            0.1,
            100.0,
        )
        .unwrap()
    }

    fn approx(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn ndc_corners_and_center() {
        assert_eq!(
            ndc_from_pointer(Point::new(0.0, 0.0), SURFACE).unwrap(),
            DVec2::new(-1.0, 1.0)
        );
        assert_eq!(
            ndc_from_pointer(Point::new(400.0, 300.0), SURFACE).unwrap(),
            DVec2::ZERO
        );
        assert_eq!(
            ndc_from_pointer(Point::new(800.0, 600.0), SURFACE).unwrap(),
            DVec2::new(1.0, -1.0)
        );
    }

    #[test]
    fn empty_surface_is_an_error() {
        assert_eq!(
            ndc_from_pointer(Point::new(1.0, 1.0), Size::new(0.0, 600.0)),
            Err(PickError::EmptySurface {
                width: 0.0,
                height: 600.0
            })
        );
    }

    #[test]
    fn center_ray_looks_down_the_view_axis() {
        let cam = camera();
        assert!(approx(cam.position(), DVec3::new(0.0, 0.0, 10.0)));

        let ray = ray_from_pointer(Point::new(400.0, 300.0), SURFACE, &cam).unwrap();
        assert!(approx(ray.origin, DVec3::new(0.0, 0.0, 10.0)));
        assert!(approx(ray.direction, DVec3::NEG_Z));
    }

    #[test]
    fn off_center_rays_diverge() {
        let cam = camera();
        let left = ray_from_pointer(Point::new(0.0, 300.0), SURFACE, &cam).unwrap();
        let top = ray_from_pointer(Point::new(400.0, 0.0), SURFACE, &cam).unwrap();
        assert!(left.direction.x < 0.0);
        assert!(top.direction.y > 0.0);
        // 90° vertical fov: the top edge ray is 45° off the axis.
        assert!((top.direction.y - top.direction.z.abs()).abs() < 1e-9);
    }

    #[test]
    fn singular_projection_is_rejected() {
        assert_eq!(
            ViewProjection::new(DMat4::IDENTITY, DMat4::ZERO),
            Err(PickError::SingularProjection)
        );
    }
}
