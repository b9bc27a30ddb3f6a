//! Layout of groove, handle and fill region.

use kurbo::{Point, Rect, Size};

use crate::appearance::Metrics;

/// Widget-local layout of the slider parts.
///
/// The groove is centered in the widget bounds. The handle travels along the
/// groove and overhangs it by [`Metrics::handle_overhang`] on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    size: Size,
    metrics: Metrics,
}

impl SliderGeometry {
    pub fn new(size: Size, metrics: Metrics) -> Self {
        Self { size, metrics }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Widget bounds at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }

    /// Whether there is no area to lay out into.
    pub fn is_degenerate(&self) -> bool {
        !(self.size.width > 0.0 && self.size.height > 0.0)
    }

    /// The visible groove, clipped to the widget bounds.
    pub fn groove_rect(&self) -> Option<Rect> {
        if self.is_degenerate() {
            return None;
        }
        let width = self.metrics.groove_width.min(self.size.width);
        let height = self.metrics.groove_height.min(self.size.height);
        Some(Rect::from_center_size(
            self.bounds().center(),
            Size::new(width, height),
        ))
    }

    /// Outer size of the handle including the overhang.
    fn handle_extent(&self) -> f64 {
        self.metrics.handle_size + 2.0 * self.metrics.handle_overhang
    }

    /// Left edge of the handle at fraction 0, and how far it can travel.
    fn track(&self, groove: Rect) -> (f64, f64) {
        let start = groove.x0 - self.metrics.handle_overhang;
        let travel = (groove.width() + 2.0 * self.metrics.handle_overhang - self.handle_extent()).max(0.0);
        (start, travel)
    }

    /// Handle rectangle for a position `fraction` in `[0, 1]`.
    pub fn handle_rect(&self, fraction: f64) -> Option<Rect> {
        let groove = self.groove_rect()?;
        let (start, travel) = self.track(groove);
        let extent = self.handle_extent();
        let x0 = start + travel * fraction.clamp(0.0, 1.0);
        let y0 = groove.center().y - extent / 2.0;
        Some(Rect::new(x0, y0, x0 + extent, y0 + extent))
    }

    /// Filled sub-track from the groove's left edge to the handle center.
    pub fn fill_rect(&self, fraction: f64) -> Option<Rect> {
        let groove = self.groove_rect()?;
        let handle = self.handle_rect(fraction)?;
        Some(Rect::new(groove.x0, groove.y0, handle.center().x.max(groove.x0), groove.y1))
    }

    /// Whether `point` lies on the handle at `fraction`.
    pub fn hit_handle(&self, point: Point, fraction: f64) -> bool {
        self.handle_rect(fraction)
            .is_some_and(|rect| rect.area() > 0.0 && rect.contains(point))
    }

    /// Position fraction that centers the handle on `x`.
    pub fn fraction_at(&self, x: f64) -> f64 {
        let Some(groove) = self.groove_rect() else {
            return 0.0;
        };
        let (start, travel) = self.track(groove);
        if travel <= 0.0 {
            return 0.0;
        }
        ((x - start - self.handle_extent() / 2.0) / travel).clamp(0.0, 1.0)
    }

    /// Horizontal center of the handle at `fraction`.
    pub fn handle_center_x(&self, fraction: f64) -> Option<f64> {
        self.handle_rect(fraction).map(|rect| rect.center().x)
    }
}

impl Default for SliderGeometry {
    fn default() -> Self {
        Self::new(Size::new(300.0, 40.0), Metrics::default())
    }
}
