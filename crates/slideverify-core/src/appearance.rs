//! Visual style of the slider.

use peniko::Color;

use crate::color::{ACCENT, NEUTRAL_WHITE};

/// Fixed dimensions of the slider parts, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Visible groove width
    pub groove_width: f64,
    /// Groove height (the filled sub-track uses the same height)
    pub groove_height: f64,
    /// Handle width and height
    pub handle_size: f64,
    /// Corner radius shared by groove, fill and handle
    pub corner_radius: f64,
    /// How far the handle overhangs the groove on each side
    pub handle_overhang: f64,
    /// Border stroke width
    pub border_width: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            groove_width: 290.0,
            groove_height: 35.0,
            handle_size: 35.0,
            corner_radius: 3.0,
            handle_overhang: 1.0,
            border_width: 1.0,
        }
    }
}

/// Complete visual description of the slider for one frame.
///
/// Immutable: animations build a new spec through [`AppearanceSpec::with_handle_fill`]
/// instead of mutating shared style state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppearanceSpec {
    pub track_fill: Color,
    pub track_border: Color,
    /// Handle fill while not pressed (the animated color)
    pub handle_fill: Color,
    pub handle_border: Color,
    pub pressed_fill: Color,
    pub pressed_border: Color,
    /// Filled sub-track left of the handle
    pub fill_region: Color,
    pub fill_border: Color,
    pub label_color: Color,
    pub metrics: Metrics,
}

impl Default for AppearanceSpec {
    fn default() -> Self {
        Self {
            track_fill: Color::from_rgb8(247, 249, 250),
            track_border: Color::from_rgb8(0xE4, 0xE7, 0xEB),
            handle_fill: NEUTRAL_WHITE,
            handle_border: Color::from_rgb8(0xC9, 0xCC, 0xCF),
            pressed_fill: ACCENT,
            pressed_border: ACCENT,
            fill_region: Color::from_rgb8(0xD1, 0xE9, 0xFE),
            fill_border: ACCENT,
            label_color: Color::from_rgba8(0, 0, 0, 100),
            metrics: Metrics::default(),
        }
    }
}

impl AppearanceSpec {
    /// Copy of this spec with a different idle handle fill.
    pub fn with_handle_fill(self, color: Color) -> Self {
        Self {
            handle_fill: color,
            ..self
        }
    }

    /// Handle fill and border for the given pressed state.
    pub fn handle_colors(&self, pressed: bool) -> (Color, Color) {
        if pressed {
            (self.pressed_fill, self.pressed_border)
        } else {
            (self.handle_fill, self.handle_border)
        }
    }
}
