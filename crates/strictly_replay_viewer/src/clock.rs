//! Fixed-period reveal clock.
//!
//! The event loop owns one [`TickClock`]. Arming it replaces any previous
//! schedule, so there is never more than one live clock. The loop asks how
//! many ticks are due and runs them one after another.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{instrument, trace};

/// Shortest period the clock accepts.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Schedule of reveal ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Option<Instant>,
}

impl TickClock {
    /// Creates a disarmed clock.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next: None,
        }
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// True while ticks are scheduled.
    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Schedules the first tick one period after `now`, dropping any
    /// previous schedule.
    #[instrument(level = "debug", skip(self, now))]
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// Stops ticking.
    pub fn disarm(&mut self) {
        self.next = None;
    }

    /// Number of ticks due at `now`, at most `max`.
    ///
    /// The schedule moves past the returned ticks. When more than `max` are
    /// overdue the backlog is dropped and the next tick is a full period
    /// after `now`.
    pub fn due_ticks(&mut self, now: Instant, max: u32) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }
        let elapsed = now.duration_since(next).as_nanos();
        let due = 1 + elapsed / self.period.as_nanos();
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        if due > max {
            trace!(due, max, "Dropping overdue ticks");
            self.next = Some(now + self.period);
            return max;
        }
        self.next = Some(next + self.period * due);
        due
    }

    /// Time until the next tick, or `None` when disarmed.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_period_is_clamped() {
        assert_eq!(TickClock::new(Duration::ZERO).period(), MIN_PERIOD);
    }
}
