//! Per-channel animation scheduler.

use std::time::Duration;

use super::task::{AnimationChannel, AnimationFrame, AnimationTask};

/// Runs at most one [`AnimationTask`] per [`AnimationChannel`].
///
/// Starting a task on an occupied channel replaces the running task, so two
/// animations never write the same property in the same tick.
#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    color: Option<AnimationTask>,
    reset: Option<AnimationTask>,
}

impl AnimationScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, channel: AnimationChannel) -> &mut Option<AnimationTask> {
        match channel {
            AnimationChannel::Color => &mut self.color,
            AnimationChannel::Reset => &mut self.reset,
        }
    }

    /// Start `task`, returning the task it replaced (if any).
    pub fn start(&mut self, task: AnimationTask) -> Option<AnimationTask> {
        let kind = task.kind();
        let replaced = self.slot_mut(kind.channel()).replace(task);
        if let Some(old) = &replaced {
            log::debug!("{:?} animation replaces in-flight {:?}", kind, old.kind());
        } else {
            log::debug!("{:?} animation started", kind);
        }
        replaced
    }

    /// Stop whatever runs on `channel`.
    pub fn stop(&mut self, channel: AnimationChannel) -> Option<AnimationTask> {
        let stopped = self.slot_mut(channel).take();
        if let Some(task) = &stopped {
            log::debug!("{:?} animation stopped", task.kind());
        }
        stopped
    }

    /// The task currently running on `channel`.
    pub fn get(&self, channel: AnimationChannel) -> Option<&AnimationTask> {
        match channel {
            AnimationChannel::Color => self.color.as_ref(),
            AnimationChannel::Reset => self.reset.as_ref(),
        }
    }

    /// Check if a task runs on `channel`.
    pub fn is_running(&self, channel: AnimationChannel) -> bool {
        self.get(channel).is_some()
    }

    /// Check if any task is running.
    pub fn is_animating(&self) -> bool {
        self.color.is_some() || self.reset.is_some()
    }

    /// Advance every running task by `dt`.
    ///
    /// Returns one frame per task that was running. Tasks that reach their
    /// end emit a final frame and are removed.
    pub fn advance(&mut self, dt: Duration) -> Vec<AnimationFrame> {
        let mut frames = Vec::with_capacity(2);
        for slot in [&mut self.color, &mut self.reset] {
            if let Some(task) = slot.as_mut() {
                let frame = task.advance(dt);
                log::trace!("{:?} tick at {:.3}", frame.kind, frame.progress);
                if frame.finished {
                    log::debug!("{:?} animation finished", frame.kind);
                    *slot = None;
                }
                frames.push(frame);
            }
        }
        frames
    }
}
