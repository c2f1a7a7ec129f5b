//! Animation scheduler
//!
//! Manages all live tweens and advances them each frame. The scheduler
//! holds weak handles; a tween whose widget was dropped is cleaned up on
//! the next tick.

use crate::easing::Easing;
use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

new_key_type! {
    pub struct TweenId;
}

/// Shared scheduler handle held by the page
pub type SharedScheduler = Arc<Mutex<AnimationScheduler>>;

/// The animation scheduler that ticks all active tweens
pub struct AnimationScheduler {
    tweens: SlotMap<TweenId, Weak<Mutex<Tween>>>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Register a new animated value with the scheduler
    pub fn animate(&mut self, initial: f32, duration_ms: u32, easing: Easing) -> AnimatedValue {
        let tween = Arc::new(Mutex::new(Tween::new(initial, duration_ms, easing)));
        self.tweens.insert(Arc::downgrade(&tween));
        tracing::trace!(initial, duration_ms, "registered animated value");
        AnimatedValue { tween }
    }

    /// Tick all animations using wall-clock delta time
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.advance_by(dt_ms);
    }

    /// Advance all animations by an explicit delta (deterministic for tests)
    pub fn advance_by(&mut self, dt_ms: f32) {
        self.tweens.retain(|_, weak| {
            let Some(tween) = weak.upgrade() else {
                return false;
            };
            tween.lock().unwrap().tick(dt_ms);
            true
        });
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.tweens.iter().any(|(_, weak)| {
            weak.upgrade()
                .map(|t| !t.lock().unwrap().is_settled())
                .unwrap_or(false)
        })
    }

    /// Number of registered tweens (live or pending cleanup)
    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle to a scheduler-ticked tween
///
/// Widgets hold one of these per animated property and re-target it when
/// their state flips.
#[derive(Clone)]
pub struct AnimatedValue {
    tween: Arc<Mutex<Tween>>,
}

impl AnimatedValue {
    /// Current interpolated value
    pub fn get(&self) -> f32 {
        self.tween.lock().unwrap().value()
    }

    /// The value this animation is heading toward
    pub fn target(&self) -> f32 {
        self.tween.lock().unwrap().target()
    }

    /// Re-target the animation, superseding any in-flight motion
    pub fn set_target(&self, target: f32) {
        self.tween.lock().unwrap().set_target(target);
    }

    /// Whether the animation is still in flight
    pub fn is_animating(&self) -> bool {
        !self.tween.lock().unwrap().is_settled()
    }
}
