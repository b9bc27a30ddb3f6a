//! Integer range control underlying the slider.

use kurbo::Point;

use super::geometry::SliderGeometry;

/// Bounded integer value with press/drag handling.
///
/// A press on the handle grabs it and later drags keep the grab offset. A
/// press elsewhere on the groove moves one page toward the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeControl {
    minimum: i32,
    maximum: i32,
    value: i32,
    page_step: i32,
    /// Pointer x minus handle center x when the handle was grabbed.
    grab: Option<f64>,
}

impl RangeControl {
    /// Create a control at `minimum`. A reversed range is swapped.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        let (minimum, maximum) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };
        Self {
            minimum,
            maximum,
            value: minimum,
            page_step: 10,
            grab: None,
        }
    }

    /// Set the page step used for groove clicks.
    pub fn with_page_step(mut self, page_step: i32) -> Self {
        self.page_step = page_step.max(0);
        self
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn page_step(&self) -> i32 {
        self.page_step
    }

    /// Set the value, clamped to the range. Returns true if it changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.minimum, self.maximum);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    /// Position of the value within the range, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.maximum <= self.minimum {
            return 0.0;
        }
        let minimum = f64::from(self.minimum);
        (f64::from(self.value) - minimum) / (f64::from(self.maximum) - minimum)
    }

    /// Value at `fraction` of the range, rounded to the nearest integer.
    pub fn value_at(&self, fraction: f64) -> i32 {
        let minimum = f64::from(self.minimum);
        let span = f64::from(self.maximum) - minimum;
        let value = (minimum + span * fraction.clamp(0.0, 1.0)).round() as i32;
        value.clamp(self.minimum, self.maximum)
    }

    /// Whether the handle is grabbed by a press.
    pub fn is_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    /// Handle a primary press at `position`.
    pub fn press(&mut self, position: Point, geometry: &SliderGeometry) {
        let fraction = self.fraction();
        let Some(center) = geometry.handle_center_x(fraction) else {
            return;
        };
        if geometry.hit_handle(position, fraction) {
            self.grab = Some(position.x - center);
        } else if geometry.bounds().contains(position) {
            let step = if position.x < center {
                -self.page_step
            } else {
                self.page_step
            };
            self.set_value(self.value.saturating_add(step));
        }
    }

    /// Follow the pointer while grabbed. Returns true if the value changed.
    pub fn drag(&mut self, position: Point, geometry: &SliderGeometry) -> bool {
        let Some(grab) = self.grab else {
            return false;
        };
        let fraction = geometry.fraction_at(position.x - grab);
        self.set_value(self.value_at(fraction))
    }

    /// Drop the grab.
    pub fn release(&mut self) {
        self.grab = None;
    }
}

impl Default for RangeControl {
    fn default() -> Self {
        Self::new(0, 100)
    }
}
