//! Progress core for the junbi startup splash.
//!
//! Pure, clock-free progress logic: a [`ProgressTimer`] that turns the
//! driver's elapsed time into a monotonic 0..=100 value, [`Easing`] curves
//! for perceived smoothness, and a [`PhaseSet`] mapping values to labeled
//! milestones. This crate contains no rendering vocabulary; any front-end
//! can consume [`ProgressState`] and a phase label.

mod easing;
mod phase;
mod timer;

pub use easing::Easing;
pub use phase::{Phase, PhaseError, PhaseSet};
pub use timer::{ProgressState, ProgressTimer, TimerPolicy};
