//! Slider configuration.
//!
//! Hosts build a [`SliderConfig`] in code or read it from JSON. The defaults
//! reproduce the stock look: a 300x40 widget, range 0-100, 300ms hover fades
//! and an 800ms ease-out reset.

use std::path::Path;
use std::time::Duration;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::Easing;
use crate::appearance::{AppearanceSpec, Metrics};
use crate::surface::LabelFont;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid range: minimum {minimum} must be below maximum {maximum}")]
    InvalidRange { minimum: i32, maximum: i32 },
    #[error("Invalid widget size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl SerializableColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Palette of the slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub track_fill: SerializableColor,
    pub track_border: SerializableColor,
    /// Idle handle fill, and the color hover transitions fade back to
    pub neutral: SerializableColor,
    pub handle_border: SerializableColor,
    /// Hovered/pressed handle and the fill border
    pub accent: SerializableColor,
    pub fill_region: SerializableColor,
    pub label: SerializableColor,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            track_fill: SerializableColor::rgb(247, 249, 250),
            track_border: SerializableColor::rgb(0xE4, 0xE7, 0xEB),
            neutral: SerializableColor::rgb(0xFF, 0xFF, 0xFF),
            handle_border: SerializableColor::rgb(0xC9, 0xCC, 0xCF),
            accent: SerializableColor::rgb(0x19, 0x91, 0xFA),
            fill_region: SerializableColor::rgb(0xD1, 0xE9, 0xFE),
            label: SerializableColor::rgba(0, 0, 0, 100),
        }
    }
}

/// Configuration for a [`VerificationSlider`](crate::VerificationSlider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Widget width in logical pixels
    pub width: f64,
    /// Widget height in logical pixels
    pub height: f64,
    pub minimum: i32,
    pub maximum: i32,
    /// Value change when the groove is clicked outside the handle
    pub page_step: i32,
    pub hover_duration_ms: u64,
    pub reset_duration_ms: u64,
    pub reset_easing: Easing,
    /// Instructional text shown while not pressed
    pub label: String,
    pub font_family: String,
    pub font_size: f32,
    pub colors: ColorConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        let font = LabelFont::default();
        Self {
            width: 300.0,
            height: 40.0,
            minimum: 0,
            maximum: 100,
            page_step: 10,
            hover_duration_ms: 300,
            reset_duration_ms: 800,
            reset_easing: Easing::OutQuint,
            label: "drag slider to fill puzzle".to_string(),
            font_family: font.family,
            font_size: font.size,
            colors: ColorConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Check the range, widget size and label font size.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.minimum >= self.maximum {
            return Err(ConfigError::InvalidRange {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        let valid_extent = |extent: f64| extent.is_finite() && extent > 0.0;
        if !(valid_extent(self.width) && valid_extent(self.height)) {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded slider config from {:?}", path);
        Ok(config)
    }

    /// Write the configuration as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn hover_duration(&self) -> Duration {
        Duration::from_millis(self.hover_duration_ms)
    }

    pub fn reset_duration(&self) -> Duration {
        Duration::from_millis(self.reset_duration_ms)
    }

    pub fn neutral_color(&self) -> Color {
        self.colors.neutral.into()
    }

    pub fn accent_color(&self) -> Color {
        self.colors.accent.into()
    }

    pub fn label_font(&self) -> LabelFont {
        LabelFont {
            family: self.font_family.clone(),
            size: self.font_size,
        }
    }

    /// Build the idle appearance from the palette.
    pub fn appearance(&self) -> AppearanceSpec {
        let accent = self.accent_color();
        AppearanceSpec {
            track_fill: self.colors.track_fill.into(),
            track_border: self.colors.track_border.into(),
            handle_fill: self.neutral_color(),
            handle_border: self.colors.handle_border.into(),
            pressed_fill: accent,
            pressed_border: accent,
            fill_region: self.colors.fill_region.into(),
            fill_border: accent,
            label_color: self.colors.label.into(),
            metrics: Metrics::default(),
        }
    }
}
