use glam::{Mat4, Vec3, Vec4Swizzles};
use serde::{Deserialize, Serialize};

use super::fit::FitResult;
use super::frustum::Frustum;
use super::spec::CameraSpec;
use crate::geometry::EPSILON;

/// Projection model of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    /// Perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
    },
    /// Parallel projection.
    Orthographic {
        /// Half of the visible height in world units.
        half_height: f32,
    },
}

/// Render-ready camera: a pose plus projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Unit viewing direction.
    pub forward: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Perspective or orthographic parameters.
    pub projection: Projection,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at a fitted pose, projecting the way `spec` asks for.
    #[must_use]
    pub fn from_fit(
        fit: &FitResult,
        spec: &CameraSpec,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let projection = match fit.ortho_half_height {
            Some(half_height) if spec.orthographic => {
                Projection::Orthographic { half_height }
            }
            _ => Projection::Perspective { fovy: spec.fovy },
        };
        Self {
            eye: fit.position,
            forward: fit.forward(),
            up: fit.up(),
            aspect: spec.safe_aspect(),
            projection,
            znear,
            zfar,
        }
    }

    /// World-to-view matrix (right-handed, looking down `-Z`).
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    /// Projection matrix with `[0,1]` depth range.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fovy } => {
                Mat4::perspective_rh(
                    fovy.to_radians(),
                    self.aspect,
                    self.znear,
                    self.zfar,
                )
            }
            Projection::Orthographic { half_height } => {
                let half_height = half_height.max(EPSILON);
                let half_width = half_height * self.aspect;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.znear,
                    self.zfar,
                )
            }
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view()
    }

    /// Frustum planes of this camera.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.build_matrix())
    }

    /// Normalized device coordinates of `point`, or `None` if it sits on or
    /// behind the eye plane.
    #[must_use]
    pub fn project_to_ndc(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.build_matrix() * point.extend(1.0);
        (clip.w > EPSILON).then(|| clip.xyz() / clip.w)
    }
}
