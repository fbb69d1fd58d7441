//! Gravity scheduling.
//!
//! The engine never reads a clock. It arms, cancels and polls a [`Scheduler`];
//! the host feeds elapsed time in. Arming always replaces the previous timer,
//! so there is never more than one live gravity timer.

use std::time::Duration;

/// A cancelable repeating timer driven by host-supplied elapsed time.
pub trait Scheduler {
    /// Start (or restart) the timer with a new period, dropping any
    /// accumulated time.
    fn arm(&mut self, interval: Duration);

    /// Stop the timer. Accumulated time is discarded.
    fn cancel(&mut self);

    /// Period of the live timer, if any.
    fn interval(&self) -> Option<Duration>;

    fn is_armed(&self) -> bool {
        self.interval().is_some()
    }

    /// Advance the timer's clock. Ignored while disarmed.
    fn update(&mut self, elapsed: Duration);

    /// Consume one due tick. Returns false when no full period has elapsed.
    fn take_tick(&mut self) -> bool;
}

/// The default [`Scheduler`]: an accumulator over a fixed period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalTimer {
    /// The period between ticks; `None` when cancelled.
    interval: Option<Duration>,
    /// Time accumulated since the last consumed tick.
    elapsed: Duration,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time accumulated towards the next tick
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Scheduler for IntervalTimer {
    fn arm(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.elapsed = Duration::ZERO;
    }

    fn cancel(&mut self) {
        self.interval = None;
        self.elapsed = Duration::ZERO;
    }

    fn interval(&self) -> Option<Duration> {
        self.interval
    }

    #[inline]
    fn update(&mut self, elapsed: Duration) {
        if self.interval.is_some() {
            self.elapsed = self.elapsed.saturating_add(elapsed);
        }
    }

    #[inline]
    fn take_tick(&mut self) -> bool {
        match self.interval {
            Some(interval) if self.elapsed >= interval => {
                self.elapsed -= interval;
                true
            }
            _ => false,
        }
    }
}
