use glam::{Quat, Vec3};
use serde::Serialize;

use crate::camera::{fit, Camera, CameraSpec, FitResult};
use crate::geometry::Aabb;
use crate::options::Options;

/// Result of framing one object for its icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FramedIcon {
    /// Union of the object's renderer bounds, before padding.
    pub bounds: Aabb,
    /// Fitted camera pose.
    pub fit: FitResult,
    /// Camera ready to hand to a renderer.
    pub camera: Camera,
}

/// Frames objects for icon rendering with a fixed set of options.
///
/// The preview direction is expressed in the object's local space, so an
/// object rotated in its prefab is still photographed from the same side.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFramer {
    preview_direction: Vec3,
    padding: f32,
    fovy: f32,
    orthographic: bool,
    aspect: f32,
    znear: f32,
    zfar: f32,
}

impl IconFramer {
    /// Framer using the camera and icon settings of `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            preview_direction: options.preview_direction(),
            padding: options.camera.padding,
            fovy: options.camera.fovy,
            orthographic: options.camera.orthographic,
            aspect: options.icons.aspect(),
            znear: options.camera.znear,
            zfar: options.camera.zfar,
        }
    }

    /// Camera description for an object with the given rotation.
    #[must_use]
    pub fn spec(&self, orientation: Quat) -> CameraSpec {
        CameraSpec {
            fovy: self.fovy,
            aspect: self.aspect,
            orthographic: self.orthographic,
            direction: orientation * self.preview_direction,
            up: orientation * Vec3::Y,
        }
    }

    /// Frame an object made of several renderers.
    ///
    /// Returns `None` when the object has no renderer bounds at all, in
    /// which case there is nothing to photograph.
    pub fn frame<I>(&self, bounds: I, orientation: Quat) -> Option<FramedIcon>
    where
        I: IntoIterator<Item = Aabb>,
    {
        let bounds = Aabb::union_all(bounds)?;
        let spec = self.spec(orientation);
        let fit = fit(bounds, &spec, self.padding);
        let camera = Camera::from_fit(&fit, &spec, self.znear, self.zfar);
        Some(FramedIcon {
            bounds,
            fit,
            camera,
        })
    }
}
