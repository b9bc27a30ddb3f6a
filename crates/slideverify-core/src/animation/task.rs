//! Animation task definitions.

use std::time::Duration;

use peniko::Color;

use super::easing::{ease, Easing};
use crate::color::lerp_color;

/// What an animation is doing to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Handle fill fading from neutral to accent.
    HoverEnter,
    /// Handle fill fading from accent back to neutral.
    HoverExit,
    /// Slider value easing back to the start of the track.
    Reset,
}

impl AnimationKind {
    /// The channel this kind of animation occupies.
    pub fn channel(self) -> AnimationChannel {
        match self {
            AnimationKind::HoverEnter | AnimationKind::HoverExit => AnimationChannel::Color,
            AnimationKind::Reset => AnimationChannel::Reset,
        }
    }
}

/// Property an animation writes. At most one task runs per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationChannel {
    /// The handle fill color.
    Color,
    /// The slider value.
    Reset,
}

/// Interpolation endpoints of a task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationParams {
    Color { start: Color, end: Color },
    Value { start: i32, end: i32 },
}

/// Interpolated output of a task at its current progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationOutput {
    Color(Color),
    Value(i32),
}

/// One tick's worth of output from a running task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    pub params: AnimationParams,
    /// Eased progress in `[0, 1]`.
    pub progress: f32,
    pub output: AnimationOutput,
    /// Whether this is the task's last frame.
    pub finished: bool,
}

/// Interpolate between two values at `progress`, rounding to the nearest
/// integer. Progress at or past 1 lands exactly on `end`.
pub fn lerp_value(start: i32, end: i32, progress: f32) -> i32 {
    if progress >= 1.0 {
        return end;
    }
    let t = f64::from(progress.max(0.0));
    let start_f = f64::from(start);
    let value = start_f + (f64::from(end) - start_f) * t;
    // Float to int casts saturate, and the result stays between the endpoints
    (value.round() as i32).clamp(start.min(end), start.max(end))
}

/// A single time-driven animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTask {
    kind: AnimationKind,
    params: AnimationParams,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl AnimationTask {
    /// Create a color transition (hover enter or exit).
    pub fn color(kind: AnimationKind, start: Color, end: Color, duration: Duration) -> Self {
        Self {
            kind,
            params: AnimationParams::Color { start, end },
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Create a reset animation driving the value from `start` to `end`.
    pub fn reset(start: i32, end: i32, duration: Duration, easing: Easing) -> Self {
        Self {
            kind: AnimationKind::Reset,
            params: AnimationParams::Value { start, end },
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn params(&self) -> AnimationParams {
        self.params
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Progress after applying the easing curve.
    pub fn eased_progress(&self) -> f32 {
        ease(self.easing, self.progress())
    }

    /// Whether the task has reached its end.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Interpolated value at the current progress.
    pub fn output(&self) -> AnimationOutput {
        let t = self.eased_progress();
        match self.params {
            AnimationParams::Color { start, end } => AnimationOutput::Color(lerp_color(start, end, t)),
            AnimationParams::Value { start, end } => AnimationOutput::Value(lerp_value(start, end, t)),
        }
    }

    /// Move the task forward by `dt` and report the resulting frame.
    pub(crate) fn advance(&mut self, dt: Duration) -> AnimationFrame {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        AnimationFrame {
            kind: self.kind,
            params: self.params,
            progress: self.eased_progress(),
            output: self.output(),
            finished: self.is_finished(),
        }
    }
}
