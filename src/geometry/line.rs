use glam::Vec3;

use super::EPSILON;

/// Parametric line `origin + direction * t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point on the line.
    pub origin: Vec3,
    /// Direction, not necessarily unit length.
    pub direction: Vec3,
}

impl Line {
    /// Line through `origin` along `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// End points of the shortest segment between two lines: the first on
    /// `self`, the second on `other`.
    ///
    /// Returns `None` when the lines are parallel (or either direction is
    /// zero), since the segment is then not unique.
    #[must_use]
    pub fn closest_points(&self, other: &Self) -> Option<(Vec3, Vec3)> {
        let a = self.direction.dot(self.direction);
        let b = self.direction.dot(other.direction);
        let e = other.direction.dot(other.direction);

        let d = a * e - b * b;
        if d <= EPSILON * a * e || d <= f32::MIN_POSITIVE {
            return None;
        }

        let r = self.origin - other.origin;
        let c = self.direction.dot(r);
        let f = other.direction.dot(r);

        let s = (b * f - c * e) / d;
        let t = (a * f - c * b) / d;

        Some((self.point_at(s), other.point_at(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skew_lines_meet_at_common_perpendicular() {
        let l1 = Line::new(Vec3::new(0.0, 0.0, 0.0), Vec3::X);
        let l2 = Line::new(Vec3::new(3.0, 5.0, 2.0), Vec3::Z * 4.0);
        let (p1, p2) = l1.closest_points(&l2).unwrap();
        assert!((p1 - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);
        assert!((p2 - Vec3::new(3.0, 5.0, 0.0)).length() < 1e-5);
        let seg = p2 - p1;
        assert!(seg.dot(l1.direction).abs() < 1e-5);
        assert!(seg.dot(l2.direction).abs() < 1e-5);
    }

    #[test]
    fn crossing_lines_share_a_point() {
        let l1 = Line::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let l2 = Line::new(Vec3::new(0.0, -4.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let (p1, p2) = l1.closest_points(&l2).unwrap();
        assert!((p1 - p2).length() < 1e-5);
        assert!((p1 - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn parallel_lines_have_no_unique_segment() {
        let l1 = Line::new(Vec3::ZERO, Vec3::X);
        let l2 = Line::new(Vec3::Y, Vec3::X * -2.0);
        assert!(l1.closest_points(&l2).is_none());
        assert!(l1.closest_points(&Line::new(Vec3::Y, Vec3::ZERO)).is_none());
    }
}
