//! Icon generator options with TOML preset support.
//!
//! Camera framing and icon image settings live here. Options serialize
//! to/from TOML so a project can keep several presets side by side.

mod camera;
mod icons;

use std::path::Path;

use glam::Vec3;
use log::info;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use camera::CameraOptions;
pub use icons::{AntiAliasing, IconOptions};

use crate::error::FitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[icons]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and framing parameters.
    pub camera: CameraOptions,
    /// Icon image parameters.
    pub icons: IconOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FitError> {
        let content = std::fs::read_to_string(path).map_err(FitError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| FitError::OptionsParse(e.to_string()))?;
        options.validate()?;
        info!("loaded icon options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FitError::Io)?;
        }
        std::fs::write(path, content).map_err(FitError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Preview direction as a vector.
    #[must_use]
    pub fn preview_direction(&self) -> Vec3 {
        Vec3::from_array(self.camera.preview_direction)
    }

    /// Reject values the fitter or a renderer cannot use.
    pub fn validate(&self) -> Result<(), FitError> {
        let camera = &self.camera;
        let invalid = |msg: String| Err(FitError::InvalidOptions(msg));

        if !(camera.fovy > 0.0 && camera.fovy < 180.0) {
            return invalid(format!(
                "camera.fovy must be in (0, 180), got {}",
                camera.fovy
            ));
        }
        if !(camera.znear > 0.0 && camera.znear < camera.zfar) {
            return invalid(format!(
                "camera.znear must be positive and below zfar, got {} / {}",
                camera.znear, camera.zfar
            ));
        }
        if !(camera.padding >= 0.0 && camera.padding.is_finite()) {
            return invalid(format!(
                "camera.padding must be non-negative, got {}",
                camera.padding
            ));
        }
        let direction = self.preview_direction();
        if !direction.is_finite() || direction.length_squared() == 0.0 {
            return invalid(format!(
                "camera.preview_direction must be a non-zero vector, \
                 got {direction}"
            ));
        }
        if self.icons.width == 0 || self.icons.height == 0 {
            return invalid(format!(
                "icons size must be non-zero, got {}x{}",
                self.icons.width, self.icons.height
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[icons]
width = 256
anti_aliasing = "x8"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.icons.width, 256);
        assert_eq!(opts.icons.anti_aliasing.samples(), 8);
        // Everything else should be default
        assert_eq!(opts.icons.height, 128);
        assert_eq!(opts.camera.padding, 0.15);
        assert!(!opts.camera.orthographic);
        assert!((opts.icons.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn default_preview_direction_is_unit_diagonal() {
        let d = Options::default().preview_direction();
        assert!((d.length() - 1.0).abs() < 1e-5);
        assert!(d.x < 0.0 && d.y < 0.0 && d.z < 0.0);
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut opts = Options::default();
        opts.camera.preview_direction = [0.0; 3];
        assert!(matches!(opts.validate(), Err(FitError::InvalidOptions(_))));

        let mut opts = Options::default();
        opts.camera.padding = -0.1;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.camera.fovy = 180.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.camera.znear = 2000.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.icons.height = 0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = Options::default();
        opts.camera.orthographic = true;
        opts.save(&dir.path().join("presets/ortho.toml")).unwrap();
        Options::default()
            .save(&dir.path().join("presets/default.toml"))
            .unwrap();
        std::fs::write(dir.path().join("presets/notes.txt"), "x").unwrap();

        let preset = dir.path().join("presets/ortho.toml");
        let loaded = Options::load(&preset).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir.path().join("presets")),
            vec!["default".to_owned(), "ortho".to_owned()]
        );
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();
        assert!(matches!(Options::load(&path), Err(FitError::OptionsParse(_))));
        assert!(matches!(
            Options::load(&dir.path().join("missing.toml")),
            Err(FitError::Io(_))
        ));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("icons"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("padding").is_some());
        assert!(camera.get("znear").is_none());
        let icons = &props["icons"]["properties"];
        assert!(icons.get("anti_aliasing").is_some());
        assert!(icons.get("background_color").is_none());
    }
}
