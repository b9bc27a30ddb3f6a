//! Interaction state definitions.

/// Pointer-driven interaction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// True strictly between a primary press and its release.
    pub pressed: bool,
    /// True while the pointer is over the handle.
    pub hovering: bool,
    /// Consecutive move events over the handle in the current hover run.
    pub hover_streak: u32,
}

impl InteractionState {
    /// Forget any hover run.
    pub fn clear_hover(&mut self) {
        self.hovering = false;
        self.hover_streak = 0;
    }
}

/// Press/release phase of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPhase {
    /// Waiting for a press.
    Idle,
    /// Primary button held.
    Pressed,
    /// Released, value easing back to the start.
    Released,
}

/// Hover phase of the handle, including in-flight color transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    NotHovering,
    /// Hovering, fade to the accent color still running.
    HoveringEntering,
    Hovering,
    /// Not hovering, fade back to neutral still running.
    HoveringExiting,
}
