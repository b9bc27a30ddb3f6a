//! Time-driven animations for the slider.
//!
//! Each animation is a tagged [`AnimationTask`] advanced by the host's frame
//! loop through a single [`AnimationScheduler`]:
//! - Color transitions (hover enter/exit) write the handle fill
//! - The reset animation writes the slider value after release

mod easing;
mod scheduler;
mod task;

pub use easing::{ease, Easing};
pub use scheduler::AnimationScheduler;
pub use task::{
    AnimationChannel, AnimationFrame, AnimationKind, AnimationOutput, AnimationParams,
    AnimationTask, lerp_value,
};
