//! Folio Animation System
//!
//! Fixed-duration tweens with easing, ticked by a scheduler.
//!
//! Animation here is strictly presentational: a tween is an interpolation
//! of (previous value, new target, elapsed time) and never part of a
//! widget's state machine. Re-targeting a tween mid-flight supersedes the
//! old animation - it restarts from the current interpolated value, nothing
//! is queued.

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{AnimatedValue, AnimationScheduler, SharedScheduler};
pub use tween::Tween;

/// Fixed transition duration shared by the disclosure and toggle widgets
pub const WIDGET_TRANSITION_MS: u32 = 200;
