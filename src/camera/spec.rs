use glam::{Mat3, Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::FitError;
use crate::geometry::EPSILON;

/// Projection parameters plus the direction the camera should look in.
///
/// Preconditions: `aspect > 0`, `direction` and `up` non-zero and not
/// parallel. The fitter tolerates violations without producing NaN, but
/// the resulting framing is meaningless; call [`CameraSpec::validate`]
/// when the values come from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    /// Vertical field of view in degrees. Ignored when orthographic.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Parallel projection instead of perspective.
    pub orthographic: bool,
    /// World-space viewing direction.
    pub direction: Vec3,
    /// World-space up hint.
    pub up: Vec3,
}

/// Orthonormal camera frame in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    /// Unit viewing direction.
    pub forward: Vec3,
    /// Unit screen-right direction.
    pub right: Vec3,
    /// Unit screen-up direction, perpendicular to `forward`.
    pub up: Vec3,
}

impl ViewBasis {
    /// Rotation taking camera-local axes (`-Z` forward, `+Y` up) to this
    /// frame.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.right, self.up, -self.forward))
    }

    /// Express a world-space offset in camera-local coordinates
    /// (x right, y up, z toward the viewer).
    #[inline]
    #[must_use]
    pub fn to_local(&self, offset: Vec3) -> Vec3 {
        Vec3::new(
            offset.dot(self.right),
            offset.dot(self.up),
            -offset.dot(self.forward),
        )
    }
}

impl CameraSpec {
    /// Perspective camera looking along `direction`.
    #[must_use]
    pub fn perspective(
        fovy: f32,
        aspect: f32,
        direction: Vec3,
        up: Vec3,
    ) -> Self {
        Self {
            fovy,
            aspect,
            orthographic: false,
            direction,
            up,
        }
    }

    /// Orthographic camera looking along `direction`.
    #[must_use]
    pub fn orthographic(aspect: f32, direction: Vec3, up: Vec3) -> Self {
        Self {
            fovy: 0.0,
            aspect,
            orthographic: true,
            direction,
            up,
        }
    }

    /// Aspect ratio clamped away from zero.
    #[must_use]
    pub fn safe_aspect(&self) -> f32 {
        if self.aspect.is_finite() && self.aspect > EPSILON {
            self.aspect
        } else {
            debug!("aspect ratio {} out of range, clamping", self.aspect);
            EPSILON
        }
    }

    /// Look-rotation frame from `direction` and `up`.
    ///
    /// A zero direction falls back to `-Z`; an up vector parallel to the
    /// direction is replaced by an arbitrary perpendicular.
    #[must_use]
    pub fn basis(&self) -> ViewBasis {
        let forward = self.direction.try_normalize().unwrap_or(Vec3::NEG_Z);
        let right = forward.cross(self.up).try_normalize().unwrap_or_else(|| {
            debug!("up vector parallel to viewing direction, picking one");
            forward.any_orthonormal_vector()
        });
        let up = right.cross(forward);
        ViewBasis { forward, right, up }
    }

    /// Check the preconditions the fitter relies on.
    pub fn validate(&self) -> Result<(), FitError> {
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(FitError::InvalidOptions(format!(
                "aspect ratio must be positive, got {}",
                self.aspect
            )));
        }
        if !self.orthographic && !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(FitError::InvalidOptions(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fovy
            )));
        }
        let Some(direction) = self.direction.try_normalize() else {
            return Err(FitError::InvalidOptions(
                "viewing direction must be a non-zero vector".to_owned(),
            ));
        };
        if direction.cross(self.up).try_normalize().is_none() {
            return Err(FitError::InvalidOptions(
                "up vector must be non-zero and not parallel to the \
                 viewing direction"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}
