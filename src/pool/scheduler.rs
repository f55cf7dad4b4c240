//! Frame-time accumulator that emits periodic fire events.
//!
//! The scheduler subtracts one period per fire instead of resetting, so the
//! fractional overrun carries into the next period and the mean firing rate
//! matches the configured period however coarse the ticking is.

use crate::error::{Result, ensure_positive};

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduler {
    period: f32,
    accumulated: f32,
}

impl Scheduler {
    /// Create a scheduler firing every `period` frame units.
    ///
    /// Fails with `InvalidConfiguration` if `period` is not positive.
    pub fn new(period: f32) -> Result<Self> {
        ensure_positive("period", period)?;
        Ok(Scheduler {
            period,
            accumulated: 0.0,
        })
    }

    /// Create a scheduler from a millisecond period.
    ///
    /// `frames_per_ms` is the runtime's ideal frames per millisecond, so the
    /// period is measured in frame units rather than wall-clock time.
    pub fn from_millis(period_ms: f32, frames_per_ms: f32) -> Result<Self> {
        ensure_positive("period_ms", period_ms)?;
        ensure_positive("frames_per_ms", frames_per_ms)?;
        Self::new(period_ms * frames_per_ms)
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Add `delta` and return how many periods elapsed (catch-up).
    ///
    /// Negative or non-finite deltas are ignored. The count saturates at
    /// `u32::MAX`.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if !(delta.is_finite() && delta >= 0.0) {
            return 0;
        }
        self.accumulated += delta;
        let mut periods = (self.accumulated / self.period).floor();
        // An overflowed accumulator collapses to zero.
        self.accumulated = (self.accumulated - periods * self.period).max(0.0);
        if self.accumulated >= self.period {
            self.accumulated -= self.period;
            periods += 1.0;
        }
        periods as u32
    }

    /// Add `delta` and fire at most once, carrying any further overrun.
    pub fn advance_once(&mut self, delta: f32) -> bool {
        if !(delta.is_finite() && delta >= 0.0) {
            return false;
        }
        self.accumulated += delta;
        if self.accumulated >= self.period {
            self.accumulated -= self.period;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}
