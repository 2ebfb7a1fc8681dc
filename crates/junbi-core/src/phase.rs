//! Mapping a progress value to a discrete labeled milestone.

use serde::Deserialize;
use thiserror::Error;

/// A labeled milestone tied to a progress threshold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phase {
    /// Progress percentage at which this phase ends.
    pub threshold: f64,
    /// Status text shown while this phase is active.
    pub label: String,
}

impl Phase {
    /// Convenience constructor, mostly for building defaults and tests.
    pub fn new(threshold: f64, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

/// Validation failure when building a [`PhaseSet`].
#[derive(Debug, Error, PartialEq)]
pub enum PhaseError {
    /// The phase list had no entries.
    #[error("phase list is empty")]
    Empty,
    /// A threshold was not strictly greater than its predecessor.
    #[error("phase thresholds must be strictly increasing (violated at index {0})")]
    NotIncreasing(usize),
}

/// Ordered phase table with strictly increasing thresholds.
///
/// Immutable after construction; lookups are pure.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSet {
    phases: Vec<Phase>,
}

impl PhaseSet {
    /// Validate and build a phase table.
    pub fn new(phases: Vec<Phase>) -> Result<Self, PhaseError> {
        if phases.is_empty() {
            return Err(PhaseError::Empty);
        }
        for (i, pair) in phases.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(PhaseError::NotIncreasing(i + 1));
            }
        }
        Ok(Self { phases })
    }

    /// Label of the first phase whose threshold is at or above `value`,
    /// saturating to the last phase when every threshold is below it.
    pub fn label_for(&self, value: f64) -> &str {
        let last = self.phases.len() - 1;
        let idx = self
            .phases
            .iter()
            .position(|p| p.threshold >= value)
            .unwrap_or(last);
        &self.phases[idx].label
    }

    /// The validated phase entries, in threshold order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}
