//! Drawing surface abstraction.

use kurbo::Rect;
use peniko::Color;

/// Stroke drawn inside a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f64,
    pub color: Color,
}

impl Border {
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Font used for the instructional label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFont {
    /// Preferred family name; surfaces fall back to their default face
    pub family: String,
    /// Size in points
    pub size: f32,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: "Microsoft YaHei".to_string(),
            size: 10.0,
        }
    }
}

/// Target the slider draws onto each render cycle.
///
/// Implementations can wrap an egui painter, a vector scene, or a recorder in
/// tests. Coordinates are widget-local: the widget's top-left corner is the
/// origin.
pub trait SliderSurface {
    /// Fill a rounded rectangle, optionally with a border.
    fn fill_rect(&mut self, rect: Rect, radius: f64, fill: Color, border: Option<Border>);

    /// Draw `text` centered inside `rect`.
    fn draw_text(&mut self, rect: Rect, text: &str, font: &LabelFont, color: Color);
}
