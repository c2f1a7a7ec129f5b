//! Fixed-duration interpolated values
//!
//! A tween moves from a start value toward a target over a fixed duration.
//! Setting a new target while the tween is in flight supersedes the old
//! animation: the tween restarts from its current interpolated value, so a
//! reversal mid-flight animates back from wherever it got to.

use crate::easing::Easing;

/// A fixed-duration interpolated value
#[derive(Clone, Debug)]
pub struct Tween {
    start: f32,
    target: f32,
    elapsed_ms: f32,
    duration_ms: u32,
    easing: Easing,
}

impl Tween {
    /// Create a tween that starts settled at `initial`
    pub fn new(initial: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            start: initial,
            target: initial,
            elapsed_ms: duration_ms as f32,
            duration_ms,
            easing,
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.is_settled() || self.duration_ms == 0 {
            return self.target;
        }
        let progress = self.elapsed_ms / self.duration_ms as f32;
        self.start + (self.target - self.start) * self.easing.apply(progress)
    }

    /// The value this tween is heading toward
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Re-target the tween, superseding any in-flight animation
    ///
    /// Restarts from the current interpolated value. Re-targeting to the
    /// current target is a no-op.
    pub fn set_target(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.start = self.value();
        self.target = target;
        self.elapsed_ms = 0.0;
    }

    /// Advance the tween by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if self.is_settled() {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms as f32);
    }

    /// Whether the tween has reached its target
    pub fn is_settled(&self) -> bool {
        self.elapsed_ms >= self.duration_ms as f32
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}
