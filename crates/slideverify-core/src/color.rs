//! Handle colors and channel interpolation.

use peniko::Color;

/// Accent blue used for the hovered and pressed handle (`#1991FA`).
pub const ACCENT: Color = Color::from_rgb8(0x19, 0x91, 0xFA);

/// Neutral handle fill (`#FFFFFF`).
pub const NEUTRAL_WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Linearly interpolate the R, G and B channels of two colors.
///
/// `progress` is clamped to `[0, 1]`. Alpha is taken from `start` and never
/// interpolated.
pub fn lerp_color(start: Color, end: Color, progress: f32) -> Color {
    let t = progress.clamp(0.0, 1.0);
    let [r1, g1, b1, a] = start.components;
    let [r2, g2, b2, _] = end.components;
    Color::new([
        r1 + t * (r2 - r1),
        g1 + t * (g2 - g1),
        b1 + t * (b2 - b1),
        a,
    ])
}
