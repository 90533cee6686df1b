use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};

/// Environment variable pointing at a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Tunables of the sketch pad.
///
/// Every field has a default, so a configuration file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Logical canvas size in device-independent pixels
    pub canvas_size: [u32; 2],
    /// Marker thickness of the "thin" preset
    pub thin_thickness: f32,
    /// Marker thickness of the "thick" preset
    pub thick_thickness: f32,
    /// Initial sticker palette, in button order
    pub stickers: Vec<String>,
    /// Em size of sticker glyphs
    pub sticker_size: f32,
    /// Linear magnification applied by export
    pub export_scale: u32,
    /// Name of the exported image
    pub export_file_name: String,
    /// Where native builds write exported images
    pub export_dir: PathBuf,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256, 256],
            thin_thickness: 1.0,
            thick_thickness: 5.0,
            stickers: vec!["😎".to_owned(), "😂".to_owned(), "😐".to_owned()],
            sticker_size: 24.0,
            export_scale: 4,
            export_file_name: "sketchpad.png".to_owned(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a configuration from JSON text.
    pub fn from_json(text: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration file.
    pub fn load(path: &Path) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn load_from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring configuration {}: {}; using defaults",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        let [width, height] = self.canvas_size;
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidConfig(format!(
                "canvas size must be non-zero, got {width}x{height}"
            )));
        }
        for (name, value) in [
            ("thin_thickness", self.thin_thickness),
            ("thick_thickness", self.thick_thickness),
            ("sticker_size", self.sticker_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SketchError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.export_scale == 0 {
            return Err(SketchError::InvalidConfig(
                "export_scale must be at least 1".to_owned(),
            ));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(SketchError::InvalidConfig(
                "export_file_name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stickers_have_built_in_glyphs() {
        let glyphs = crate::surface::GlyphSet::builtin();
        for sticker in SketchConfig::default().stickers {
            assert!(glyphs.covers(&sticker), "{sticker:?} would draw as a box");
        }
    }

    #[test]
    fn defaults_match_the_classic_pad() {
        let config = SketchConfig::default();
        assert_eq!(config.canvas_size, [256, 256]);
        assert_eq!(config.thin_thickness, 1.0);
        assert_eq!(config.thick_thickness, 5.0);
        assert_eq!(config.export_scale, 4);
        assert_eq!(config.export_file_name, "sketchpad.png");
        assert_eq!(config.stickers, vec!["😎", "😂", "😐"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SketchConfig::from_json(r#"{ "export_scale": 2, "stickers": ["⭐"] }"#)
            .expect("valid config");
        assert_eq!(config.export_scale, 2);
        assert_eq!(config.stickers, vec!["⭐"]);
        assert_eq!(config.canvas_size, [256, 256]);
    }

    #[test]
    fn rejects_zero_export_scale() {
        let err = SketchConfig::from_json(r#"{ "export_scale": 0 }"#).unwrap_err();
        assert!(matches!(err, SketchError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SketchConfig::from_json("{ canvas_size: ").unwrap_err();
        assert!(matches!(err, SketchError::ConfigParse(_)));
    }

    #[test]
    fn rejects_non_positive_thickness() {
        let config = SketchConfig {
            thick_thickness: 0.0,
            ..SketchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
