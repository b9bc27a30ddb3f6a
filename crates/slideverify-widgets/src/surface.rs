//! egui painter surface.

use egui::{Align2, CornerRadius, FontFamily, FontId, Painter, Pos2, Stroke, StrokeKind};
use kurbo::Rect;
use peniko::Color;
use slideverify_core::{Border, LabelFont, SliderSurface};

use crate::convert::{to_color32, to_egui_rect};
use crate::sizing;

/// Paints slider parts through an [`egui::Painter`].
///
/// Widget-local coordinates are offset by `origin`. Label text uses
/// `font_family` because egui only knows families registered with its font
/// definitions; the family named in [`LabelFont`] is ignored here.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    font_family: FontFamily,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            font_family: FontFamily::Proportional,
        }
    }

    /// Use a registered egui font family for the label.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }
}

impl SliderSurface for EguiSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, radius: f64, fill: Color, border: Option<Border>) {
        let rect = to_egui_rect(rect, self.origin);
        let corner_radius = CornerRadius::same(radius.round().clamp(0.0, 255.0) as u8);
        self.painter.rect_filled(rect, corner_radius, to_color32(fill));
        if let Some(border) = border {
            self.painter.rect_stroke(
                rect,
                corner_radius,
                Stroke::new(border.width as f32, to_color32(border.color)),
                StrokeKind::Inside,
            );
        }
    }

    fn draw_text(&mut self, rect: Rect, text: &str, font: &LabelFont, color: Color) {
        let rect = to_egui_rect(rect, self.origin);
        self.painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::new(font.size * sizing::PIXELS_PER_POINT, self.font_family.clone()),
            to_color32(color),
        );
    }
}
