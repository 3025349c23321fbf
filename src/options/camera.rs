use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Icon camera projection and framing parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 1.0, max = 179.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Render icons with a parallel projection.
    #[schemars(title = "Orthographic")]
    pub orthographic: bool,
    /// Margin around the object, as a fraction of its size per edge.
    #[schemars(
        title = "Padding",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.01)
    )]
    pub padding: f32,
    /// Viewing direction in the object's local space.
    #[schemars(title = "Preview Direction")]
    pub preview_direction: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        let d = -1.0 / 3.0_f32.sqrt();
        Self {
            fovy: 60.0,
            znear: 0.01,
            zfar: 1000.0,
            orthographic: false,
            padding: 0.15,
            preview_direction: [d, d, d],
        }
    }
}
