//! Easing curves mapping linear time progress to eased progress.

use serde::{Deserialize, Serialize};

/// Easing curve applied to an animation's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic deceleration.
    OutQuad,
    /// Cubic deceleration.
    OutCubic,
    /// Quintic deceleration: very fast start, long soft landing.
    OutQuint,
    /// Cubic acceleration then deceleration.
    InOutCubic,
}

/// Evaluate `easing` at `t`. `t` is clamped to `[0, 1]`.
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::OutQuad => 1.0 - (1.0 - t).powi(2),
        Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::OutQuint => 1.0 - (1.0 - t).powi(5),
        Easing::InOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}
