use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};
use crate::stroke::Thickness;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Sketchpad settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Drawing buffer size in canvas pixels
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Screen points per canvas pixel
    pub display_scale: f32,
    pub thin_thickness: Thickness,
    pub thick_thickness: Thickness,
    /// Any CSS colour
    pub stroke_color: String,
    pub background_color: String,
    /// Alpha of the tool preview ring
    pub preview_opacity: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            display_scale: 2.0,
            thin_thickness: Thickness::THIN,
            thick_thickness: Thickness::THICK,
            stroke_color: "#000".to_owned(),
            background_color: "#fff".to_owned(),
            preview_opacity: 0.6,
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SketchResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SketchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, or the defaults if unset
    pub fn from_env() -> SketchResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::debug!("{CONFIG_ENV_VAR} not set, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(SketchError::InvalidConfig(format!(
                "canvas size must be non-zero, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.display_scale.is_finite() && self.display_scale > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "display_scale must be positive, got {}",
                self.display_scale
            )));
        }
        if !(0.0..=1.0).contains(&self.preview_opacity) {
            return Err(SketchError::InvalidConfig(format!(
                "preview_opacity must be within 0..=1, got {}",
                self.preview_opacity
            )));
        }
        self.stroke_color()?;
        self.background_color()?;
        Ok(())
    }

    pub fn stroke_color(&self) -> SketchResult<Color32> {
        parse_color(&self.stroke_color)
    }

    pub fn background_color(&self) -> SketchResult<Color32> {
        parse_color(&self.background_color)
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width as f32, self.canvas_height as f32)
    }
}

fn parse_color(value: &str) -> SketchResult<Color32> {
    let color = csscolorparser::parse(value).map_err(|e| SketchError::InvalidColor {
        value: value.to_owned(),
        reason: e.to_string(),
    })?;
    let [r, g, b, a] = color.to_rgba8();
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}
