//! View frustum for visibility checks
//!
//! Extracts frustum planes from a view-projection matrix and tests points
//! and boxes against them. Works for perspective and orthographic
//! projections alike.

use glam::{Mat4, Vec3, Vec4};

use crate::geometry::{Aabb, Plane};

/// View frustum consisting of 6 planes
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    /// Uses the Gribb/Hartmann method for plane extraction.
    /// Planes point inward (positive half-space is inside the frustum).
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];
        let [x, y, z, w] = rows;

        // [0,1] depth (wgpu/Vulkan): near plane is just the z row.
        let coefficients: [Vec4; 6] = [w + x, w - x, w + y, w - y, z, w - z];
        Self {
            planes: coefficients
                .map(|c| Plane::from_coefficients(c.x, c.y, c.z, c.w)),
        }
    }

    /// Test if a point is inside the frustum, allowing it to sit up to
    /// `tolerance` outside any plane.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3, tolerance: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= -tolerance)
    }

    /// Test if a box is completely inside the frustum (all 8 corners).
    #[must_use]
    pub fn contains_aabb(&self, bounds: &Aabb, tolerance: f32) -> bool {
        bounds
            .corners()
            .iter()
            .all(|&corner| self.contains_point(corner, tolerance))
    }

    /// Test if a sphere intersects or is inside the frustum
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perspective_frustum() -> Frustum {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn frustum_contains_origin() {
        let frustum = perspective_frustum();
        assert!(frustum.contains_point(Vec3::ZERO, 0.0));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0), 0.0));
    }

    #[test]
    fn box_containment_checks_every_corner() {
        let frustum = perspective_frustum();
        assert!(frustum.contains_aabb(&Aabb::new(Vec3::ZERO, Vec3::ONE), 0.0));
        // Pokes out sideways at the depth of the origin.
        let wide = Aabb::new(Vec3::ZERO, Vec3::new(8.0, 1.0, 1.0));
        assert!(!frustum.contains_aabb(&wide, 0.0));
    }

    #[test]
    fn orthographic_frustum_is_a_box() {
        let proj = Mat4::orthographic_rh(-2.0, 2.0, -1.0, 1.0, 0.1, 100.0);
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = Mat4::look_to_rh(eye, Vec3::NEG_Z, Vec3::Y);
        let frustum = Frustum::from_view_projection(proj * view);
        assert!(frustum.contains_point(Vec3::new(1.9, 0.9, -50.0), 0.0));
        assert!(!frustum.contains_point(Vec3::new(2.1, 0.0, 0.0), 0.0));
        assert!(frustum.intersects_sphere(Vec3::new(2.5, 0.0, 0.0), 1.0));
    }
}
