//! egui integration for the SlideVerify slider.
//!
//! - **Slider**: [`SlideVerify`], the egui widget wrapping a
//!   [`VerificationSlider`](slideverify_core::VerificationSlider)
//! - **Surface**: [`EguiSurface`], painting slider parts with an `egui::Painter`
//! - **Convert**: kurbo/peniko to egui conversions

pub mod convert;
pub mod slider;
pub mod surface;

pub use convert::{to_color32, to_egui_rect, to_local_point};
pub use slider::{translate_event, SlideVerify};
pub use surface::EguiSurface;

/// Standard sizing constants.
pub mod sizing {
    /// Pixels per typographic point, for label sizes given in points.
    pub const PIXELS_PER_POINT: f32 = 96.0 / 72.0;
}
