//! Keyframe bookkeeping for entry/exit and value-change transitions.
//!
//! The engine never schedules time itself. Mutations record start and end
//! keyframes here; the owner drives them from its own timeline by calling
//! [`AnimatedValue::advance`] each tick and re-running layout.

use std::time::Duration;

/// Default transition length for data-change animations.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(700);

/// Start/end keyframes handed to the owner's timeline when a target changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

/// A value with an animated "currently displayed" state distinct from its
/// target. Layout always plots `current`; data mutation moves `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    start: f64,
    current: f64,
    target: f64,
}

impl AnimatedValue {
    /// A settled value: current == target.
    pub fn new(value: f64) -> Self {
        Self {
            start: value,
            current: value,
            target: value,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Begins a transition from the currently displayed value to `target`,
    /// returning the keyframes the owner should schedule.
    pub fn set_target(&mut self, target: f64) -> Keyframes {
        self.start = self.current;
        self.target = target;
        Keyframes {
            from: self.start,
            to: target,
            duration: DEFAULT_TRANSITION,
        }
    }

    /// Jumps straight to `value`, discarding any transition.
    pub fn jump(&mut self, value: f64) {
        self.start = value;
        self.current = value;
        self.target = value;
    }

    /// Moves the displayed value along the transition; `progress` in [0, 1].
    pub fn advance(&mut self, progress: f64) {
        let t = progress.clamp(0.0, 1.0);
        self.current = self.start + (self.target - self.start) * t;
    }

    /// Finishes the transition immediately.
    pub fn finish(&mut self) {
        self.start = self.target;
        self.current = self.target;
    }
}
