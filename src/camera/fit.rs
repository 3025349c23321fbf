//! Tight camera placement for a bounding box.
//!
//! [`fit`] is a pure function: same box, camera and padding in, same pose
//! out. It never fails. Near-zero denominators and non-finite intermediate
//! values fall back to a camera one unit in front of the box center, and
//! every result keeps the nearest corner at least [`NEAR_CLEARANCE`] in
//! front of the eye.

use glam::{Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use super::spec::{CameraSpec, ViewBasis};
use crate::geometry::{Aabb, Plane, EPSILON};

/// Minimum depth of the nearest box corner, as a fraction of the padded
/// box's half-diagonal. A near plane closer than that never clips the box.
pub const NEAR_CLEARANCE: f32 = 0.05;

/// Where to put the camera, and for orthographic cameras how much to show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera rotation (camera-local `-Z` is the viewing direction).
    pub orientation: Quat,
    /// Orthographic half-height in world units; `None` for perspective.
    pub ortho_half_height: Option<f32>,
}

impl FitResult {
    /// Unit viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Unit screen-up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Distance from the camera to `point` measured along the view axis.
    #[must_use]
    pub fn depth_of(&self, point: Vec3) -> f32 {
        (point - self.position).dot(self.forward())
    }

    /// True if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.orientation.is_finite()
            && self.ortho_half_height.is_none_or(f32::is_finite)
    }
}

/// Fit `bounds` into the view of `camera`, leaving `padding` (a fraction of
/// the box size, per edge) as margin.
#[must_use]
pub fn fit(bounds: Aabb, camera: &CameraSpec, padding: f32) -> FitResult {
    let bounds = bounds.padded(padding);
    let corners = bounds.corners();
    let basis = camera.basis();
    let aspect = camera.safe_aspect();

    let mut result = if camera.orthographic {
        fit_orthographic(&bounds, &corners, &basis, aspect)
    } else {
        fit_perspective(&bounds, &corners, &basis, camera.fovy, aspect)
    };

    let clearance = (bounds.extents().length() * NEAR_CLEARANCE).max(EPSILON);
    result.position =
        clear_near_corners(result.position, &corners, basis.forward, clearance);
    result
}

fn fit_orthographic(
    bounds: &Aabb,
    corners: &[Vec3; 8],
    basis: &ViewBasis,
    aspect: f32,
) -> FitResult {
    let center = bounds.center();
    let (min, max) = corners.iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(lo, hi), &corner| {
            let local = basis.to_local(corner - center);
            (lo.min(local), hi.max(local))
        },
    );

    let width = (max.x - min.x) / aspect;
    let half_height = ((max.y - min.y).max(width) * 0.5).max(0.0);
    // Any distance works for framing; this one keeps the box in front.
    let distance = bounds.extents().length() + 1.0;

    let result = FitResult {
        position: center - basis.forward * distance,
        orientation: basis.rotation(),
        ortho_half_height: Some(half_height),
    };
    if result.is_finite() {
        result
    } else {
        debug!("orthographic fit produced non-finite values, using fallback");
        fallback(bounds, basis, Some(0.0))
    }
}

fn fit_perspective(
    bounds: &Aabb,
    corners: &[Vec3; 8],
    basis: &ViewBasis,
    fovy: f32,
    aspect: f32,
) -> FitResult {
    let half_v = (fovy * 0.5).to_radians();
    let half_h = (half_v.tan() * aspect).atan();

    let [top, bottom, left, right] = side_normals(basis, half_v, half_h);

    let plane_for = |normal: Vec3| {
        let corner = corners[outermost_corner(corners, normal)];
        Plane::from_normal_and_point(normal, corner)
    };

    let horizontal = plane_for(left).intersect(&plane_for(right));
    let vertical = plane_for(top).intersect(&plane_for(bottom));

    let Some((h, v)) = horizontal.zip(vertical) else {
        debug!("side planes parallel at fovy {fovy}, using fallback");
        return fallback(bounds, basis, None);
    };
    let Some((p1, p2)) = h.closest_points(&v) else {
        debug!("frustum intersection lines are parallel, using fallback");
        return fallback(bounds, basis, None);
    };

    let position = if (p1 - p2).dot(basis.forward) < 0.0 {
        p1
    } else {
        p2
    };

    let depth = (bounds.center() - position).dot(basis.forward);
    if !position.is_finite() || depth <= EPSILON {
        debug!("perspective fit degenerate (depth {depth}), using fallback");
        return fallback(bounds, basis, None);
    }

    FitResult {
        position,
        orientation: basis.rotation(),
        ortho_half_height: None,
    }
}

/// Outward normals of the top, bottom, left and right frustum planes.
fn side_normals(basis: &ViewBasis, half_v: f32, half_h: f32) -> [Vec3; 4] {
    let vertical = std::f32::consts::FRAC_PI_2 + half_v;
    let horizontal = std::f32::consts::FRAC_PI_2 + half_h;
    let f = basis.forward;
    [
        Quat::from_axis_angle(basis.right, vertical) * f,
        Quat::from_axis_angle(-basis.right, vertical) * f,
        Quat::from_axis_angle(basis.up, horizontal) * f,
        Quat::from_axis_angle(-basis.up, horizontal) * f,
    ]
}

/// Index of the first corner that no other corner lies beyond along
/// `direction`. Lowest index wins ties; index 0 if none qualifies.
fn outermost_corner(corners: &[Vec3; 8], direction: Vec3) -> usize {
    (0..corners.len())
        .find(|&i| {
            corners.iter().enumerate().all(|(j, &q)| {
                j == i || direction.dot(q - corners[i]) <= 0.0
            })
        })
        .unwrap_or(0)
}

/// Move `position` back along `-forward` until every corner is at least
/// `clearance` deep.
///
/// Wide fields of view put the tangent point on the nearest corner itself.
/// Backing off along the view axis only widens the frustum around the box,
/// so every side constraint still holds.
fn clear_near_corners(
    position: Vec3,
    corners: &[Vec3; 8],
    forward: Vec3,
    clearance: f32,
) -> Vec3 {
    let nearest = corners
        .iter()
        .map(|&c| (c - position).dot(forward))
        .fold(f32::INFINITY, f32::min);
    if nearest >= clearance {
        return position;
    }
    debug!("nearest corner at depth {nearest}, backing off to {clearance}");
    position - forward * (clearance - nearest)
}

fn fallback(
    bounds: &Aabb,
    basis: &ViewBasis,
    ortho_half_height: Option<f32>,
) -> FitResult {
    FitResult {
        position: bounds.center() - basis.forward,
        orientation: basis.rotation(),
        ortho_half_height: ortho_half_height.filter(|h| h.is_finite()),
    }
}
