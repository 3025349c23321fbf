use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::EPSILON;

/// Axis-aligned bounding box stored as center and half-size.
///
/// Extents are never negative; every constructor folds signs away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAabb")]
pub struct Aabb {
    center: Vec3,
    extents: Vec3,
}

#[derive(Deserialize)]
struct RawAabb {
    center: Vec3,
    extents: Vec3,
}

impl From<RawAabb> for Aabb {
    fn from(raw: RawAabb) -> Self {
        Self::new(raw.center, raw.extents)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}

impl Aabb {
    /// Box with the given center and half-size per axis.
    #[must_use]
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self {
            center,
            extents: extents.abs(),
        }
    }

    /// Box spanning two opposite corners, in any order.
    #[must_use]
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new((min + max) * 0.5, (max - min) * 0.5)
    }

    /// Smallest box enclosing all points, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) =
            iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self::from_min_max(min, max))
    }

    /// Union of all boxes, or `None` when there are none.
    pub fn union_all<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        boxes.into_iter().reduce(Self::union)
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Half-size per axis.
    #[inline]
    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Full size per axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// Minimum corner.
    #[inline]
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Maximum corner.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// True when every extent is (numerically) zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.extents.max_element() <= EPSILON
    }

    /// Grow this box to also enclose `other`.
    pub fn encapsulate(&mut self, other: Self) {
        *self = self.union(other);
    }

    /// Smallest box enclosing both boxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::from_min_max(
            self.min().min(other.min()),
            self.max().max(other.max()),
        )
    }

    /// Same center, size scaled by `1 + 2 * padding` so the margin lands on
    /// both edges. Negative padding counts as zero.
    #[must_use]
    pub fn padded(&self, padding: f32) -> Self {
        let padding = padding.max(0.0);
        if padding == 0.0 {
            return *self;
        }
        Self::new(self.center, self.extents * (1.0 + 2.0 * padding))
    }

    /// The 8 corner points.
    ///
    /// Order is stable: start at the max corner, then walk `-x`, `-y`,
    /// `+x`, `-z`, `-x`, `+y`, `+x`. Tie-breaks elsewhere in the crate
    /// resolve to the lowest index in this order.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let size = self.size();
        let mut point = self.max();
        let mut corners = [point; 8];
        let steps = [
            Vec3::new(-size.x, 0.0, 0.0),
            Vec3::new(0.0, -size.y, 0.0),
            Vec3::new(size.x, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -size.z),
            Vec3::new(-size.x, 0.0, 0.0),
            Vec3::new(0.0, size.y, 0.0),
            Vec3::new(size.x, 0.0, 0.0),
        ];
        for (corner, step) in corners.iter_mut().skip(1).zip(steps) {
            point += step;
            *corner = point;
        }
        corners
    }

    /// True if `point` lies inside or on the box, with `tolerance` slack.
    #[must_use]
    pub fn contains_point(&self, point: Vec3, tolerance: f32) -> bool {
        ((point - self.center).abs() - self.extents).max_element() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_extents_are_folded() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(b.extents(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn corners_are_distinct_and_start_at_max() {
        let b = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
        let corners = b.corners();
        assert_eq!(corners[0], b.max());
        for (i, a) in corners.iter().enumerate() {
            assert!(b.contains_point(*a, 1e-5));
            for c in &corners[i + 1..] {
                assert_ne!(a, c);
            }
        }
        assert!(corners.contains(&b.min()));
    }

    #[test]
    fn union_encloses_both() {
        let a = Aabb::from_min_max(Vec3::ZERO, Vec3::ONE);
        let b =
            Aabb::from_min_max(Vec3::splat(-2.0), Vec3::new(0.5, 0.5, -1.0));
        let u = a.union(b);
        assert_eq!(u.min(), Vec3::splat(-2.0));
        assert_eq!(u.max(), Vec3::ONE);

        let mut grown = a;
        grown.encapsulate(b);
        assert_eq!(grown, u);
    }

    #[test]
    fn union_all_of_nothing_is_none() {
        assert!(Aabb::union_all(std::iter::empty()).is_none());
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn from_points_is_tight() {
        let b = Aabb::from_points([
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-3.0, 4.0, 2.0),
            Vec3::new(0.0, 0.0, -5.0),
        ])
        .unwrap();
        assert_eq!(b.min(), Vec3::new(-3.0, -1.0, -5.0));
        assert_eq!(b.max(), Vec3::new(1.0, 4.0, 2.0));
    }

    #[test]
    fn padding_scales_size_on_both_edges() {
        let b = Aabb::new(Vec3::X, Vec3::new(1.0, 2.0, 0.5));
        let p = b.padded(0.25);
        assert_eq!(p.center(), b.center());
        assert_eq!(p.size(), b.size() * 1.5);
        assert_eq!(b.padded(-1.0), b);
    }

    #[test]
    fn point_box_is_degenerate() {
        assert!(Aabb::default().is_degenerate());
        assert!(!Aabb::new(Vec3::ZERO, Vec3::X).is_degenerate());
    }

    #[test]
    fn deserialize_folds_signs() {
        let b: Aabb = serde_json::from_str(
            r#"{"center":[0.0,0.0,0.0],"extents":[-1.0,1.0,1.0]}"#,
        )
        .unwrap();
        assert_eq!(b.extents(), Vec3::ONE);
    }
}
