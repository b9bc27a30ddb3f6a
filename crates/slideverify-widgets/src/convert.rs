//! Conversions between the core geometry/color types and egui.

use egui::{pos2, Color32, Pos2};
use kurbo::{Point, Rect};
use peniko::Color;

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Map a widget-local rect to screen space given the widget origin.
pub fn to_egui_rect(rect: Rect, origin: Pos2) -> egui::Rect {
    egui::Rect::from_min_max(
        pos2(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        pos2(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}

/// Map a screen position into widget-local coordinates.
pub fn to_local_point(pos: Pos2, origin: Pos2) -> Point {
    Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}
