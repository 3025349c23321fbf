use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Multisample count for icon render targets.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AntiAliasing {
    /// No multisampling.
    Off,
    /// 2 samples per pixel.
    X2,
    /// 4 samples per pixel.
    #[default]
    X4,
    /// 8 samples per pixel.
    X8,
}

impl AntiAliasing {
    /// Samples per pixel.
    #[must_use]
    pub fn samples(self) -> u32 {
        match self {
            Self::Off => 1,
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Icons", inline)]
#[serde(default)]
/// Icon image and lighting parameters handed to the renderer.
pub struct IconOptions {
    /// Icon width in pixels.
    #[schemars(title = "Width", range(min = 16, max = 1024))]
    pub width: u32,
    /// Icon height in pixels.
    #[schemars(title = "Height", range(min = 16, max = 1024))]
    pub height: u32,
    /// Multisampling used when rendering.
    #[schemars(title = "Anti-aliasing")]
    pub anti_aliasing: AntiAliasing,
    /// Clear color (RGBA, linear).
    #[schemars(skip)]
    pub background_color: [f32; 4],
    /// Attach a directional light to the icon camera.
    #[schemars(title = "Use Light")]
    pub use_light: bool,
    /// Light color (RGBA, linear).
    #[schemars(skip)]
    pub light_color: [f32; 4],
    /// Light intensity multiplier.
    #[schemars(
        title = "Light Intensity",
        range(min = 0.0, max = 8.0),
        extend("step" = 0.1)
    )]
    pub light_intensity: f32,
}

impl IconOptions {
    /// Icon aspect ratio (width / height); 1.0 for a zero height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            anti_aliasing: AntiAliasing::X4,
            background_color: [0.15, 0.15, 0.15, 1.0],
            use_light: true,
            light_color: [1.0, 0.957, 0.839, 1.0],
            light_intensity: 1.0,
        }
    }
}
