//! The slider widget and the pieces it is built from.
//!
//! - Interaction flags and phases
//! - Widget-local geometry with handle hit testing
//! - The integer range control that handles presses and drags
//! - [`VerificationSlider`], the state machine tying them to animations

mod geometry;
mod range;
mod state;
mod widget;

pub use geometry::SliderGeometry;
pub use range::RangeControl;
pub use state::{HoverPhase, InteractionState, SliderPhase};
pub use widget::VerificationSlider;
