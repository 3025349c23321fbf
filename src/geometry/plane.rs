use glam::Vec3;

use super::{Line, EPSILON};

/// A plane `normal · p + distance = 0`.
///
/// The normal is not required to be unit length; signed distances are then
/// scaled by its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed offset from the origin.
    pub distance: f32,
}

impl Plane {
    /// Plane with the given normal passing through `point`.
    #[must_use]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let normal = Vec3::new(a, b, c);
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: d / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Line shared by both planes, or `None` when they are parallel.
    ///
    /// The line direction is `self.normal × other.normal`, unnormalized.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Line> {
        let direction = self.normal.cross(other.normal);
        let det = direction.length_squared();
        let scale =
            self.normal.length_squared() * other.normal.length_squared();
        if det <= EPSILON * scale {
            return None;
        }
        let origin = (direction.cross(other.normal) * self.distance
            + self.normal.cross(direction) * other.distance)
            / det;
        Some(Line::new(origin, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_through_point_contains_it() {
        let p = Plane::from_normal_and_point(
            Vec3::new(1.0, 2.0, -1.0),
            Vec3::new(3.0, -1.0, 4.0),
        );
        assert!(p.distance_to_point(Vec3::new(3.0, -1.0, 4.0)).abs() < 1e-6);
        assert!(p.distance_to_point(Vec3::new(4.0, -1.0, 4.0)) > 0.0);
    }

    #[test]
    fn normalized_coefficients() {
        let p = Plane::from_coefficients(0.0, 3.0, 4.0, 10.0);
        assert!((p.normal.length() - 1.0).abs() < 1e-6);
        assert!((p.distance - 2.0).abs() < 1e-6);
        let flat = Plane::from_coefficients(0.0, 0.0, 0.0, 1.0);
        assert_eq!(flat.normal, Vec3::ZERO);
    }

    #[test]
    fn intersection_lies_on_both_planes() {
        let a = Plane::from_normal_and_point(
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        let b = Plane::from_normal_and_point(
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(0.0, 0.0, 5.0),
        );
        let line = a.intersect(&b).unwrap();
        for t in [-3.0, 0.0, 2.5] {
            let p = line.point_at(t);
            assert!(a.distance_to_point(p).abs() < 1e-4);
            assert!(b.distance_to_point(p).abs() < 1e-4);
        }
    }

    #[test]
    fn parallel_planes_do_not_intersect() {
        let a = Plane::from_normal_and_point(Vec3::Y, Vec3::ZERO);
        let b = Plane::from_normal_and_point(-Vec3::Y, Vec3::Y);
        assert!(a.intersect(&b).is_none());
    }
}
