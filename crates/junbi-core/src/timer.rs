//! Progress timer driven by the owner's clock.

use crate::Easing;

/// How elapsed time is converted into a progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerPolicy {
    /// Normalize elapsed time over `total_ms` and shape it with `easing`.
    Duration {
        /// Target duration of the whole ramp in milliseconds.
        total_ms: u64,
        /// Curve applied to normalized elapsed time.
        easing: Easing,
    },
    /// Add `step` percent once per `interval_ms`, saturating at 100.
    Tick {
        /// Fixed tick period in milliseconds.
        interval_ms: u64,
        /// Percent added per tick.
        step: f64,
    },
}

/// Observable progress state exposed to the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressState {
    /// Progress percentage in `0.0..=100.0`.
    pub value: f64,
    /// True once the settle delay after reaching 100 has elapsed.
    pub completed: bool,
}

/// Produces a monotonically non-decreasing progress value in `0..=100`.
///
/// The timer owns no clock and schedules nothing. The driver samples its own
/// start `Instant` and passes `elapsed_ms` to [`advance`](Self::advance) on
/// every frame, which keeps the timer deterministic under test and free of
/// global timer state. Each splash instance owns its own timer.
#[derive(Debug)]
pub struct ProgressTimer {
    policy: TimerPolicy,
    /// Delay between raw progress reaching 100 and `completed` flipping.
    settle_ms: u64,
    state: ProgressState,
    /// Elapsed time at which raw progress first reached 100.
    full_at_ms: Option<u64>,
    cancelled: bool,
}

impl ProgressTimer {
    /// Create a timer for the given policy and settle delay.
    pub fn new(policy: TimerPolicy, settle_ms: u64) -> Self {
        Self {
            policy,
            settle_ms,
            state: ProgressState::default(),
            full_at_ms: None,
            cancelled: false,
        }
    }

    /// Advance to `elapsed_ms` since the splash was mounted.
    ///
    /// No-op after [`cancel`](Self::cancel) or after completion: a late
    /// frame callback firing past teardown must not mutate state.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.cancelled || self.state.completed {
            return;
        }

        let raw = match self.policy {
            TimerPolicy::Duration { total_ms, .. } => {
                if total_ms == 0 {
                    1.0
                } else {
                    (elapsed_ms as f64 / total_ms as f64).min(1.0)
                }
            }
            TimerPolicy::Tick { interval_ms, step } => {
                let ticks = elapsed_ms / interval_ms.max(1);
                (ticks as f64 * step / 100.0).min(1.0)
            }
        };

        let shaped = match self.policy {
            TimerPolicy::Duration { easing, .. } => easing.apply(raw),
            TimerPolicy::Tick { .. } => raw,
        };

        // Never step backwards, even if the driver misreports elapsed time.
        self.state.value = self.state.value.max(shaped * 100.0);

        if raw >= 1.0 {
            self.state.value = 100.0;
            let full_at = *self.full_at_ms.get_or_insert(elapsed_ms);
            if elapsed_ms.saturating_sub(full_at) >= self.settle_ms {
                self.state.completed = true;
            }
        }
    }

    /// Invalidate the timer; every later [`advance`](Self::advance) is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Current observable state.
    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Current progress percentage.
    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// Whether the settle delay after reaching 100 has elapsed.
    pub fn is_completed(&self) -> bool {
        self.state.completed
    }
}
