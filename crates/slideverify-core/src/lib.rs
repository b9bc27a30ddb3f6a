//! SlideVerify Core Library
//!
//! Platform-agnostic state machine, geometry and animations for the
//! "slide to verify" control. Hosts feed pointer events and frame time in,
//! and draw the result through a [`SliderSurface`].

pub mod animation;
pub mod appearance;
pub mod color;
pub mod config;
pub mod input;
pub mod slider;
pub mod surface;

pub use animation::{
    ease, AnimationChannel, AnimationFrame, AnimationKind, AnimationOutput, AnimationParams, AnimationScheduler,
    AnimationTask, Easing, lerp_value,
};
pub use appearance::{AppearanceSpec, Metrics};
pub use color::{lerp_color, ACCENT, NEUTRAL_WHITE};
pub use config::{ColorConfig, ConfigError, ConfigResult, SerializableColor, SliderConfig};
pub use input::{MouseButton, PointerEvent};
pub use slider::{
    HoverPhase, InteractionState, RangeControl, SliderGeometry, SliderPhase, VerificationSlider,
};
pub use surface::{Border, LabelFont, SliderSurface};
