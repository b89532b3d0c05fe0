//! Value debouncing
//!
//! [`Debouncer`] holds at most one pending value with a deadline. Every new
//! value replaces the pending one and restarts the delay; the value is only
//! handed out once the deadline passes with no further updates. Time is
//! passed in by the caller, so the event loop decides when to poll.

use std::time::{Duration, Instant};

struct Pending<T> {
    value: T,
    deadline: Instant,
    since: Instant,
}

/// Collapses bursts of updates into a single trailing emission
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    closed: bool,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            closed: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new input value.
    ///
    /// Replaces any pending value and restarts the delay. With a zero delay
    /// the value is returned straight away instead, so each change is
    /// emitted exactly once. Ignored after [`close`](Self::close).
    pub fn update(&mut self, value: T, now: Instant) -> Option<T> {
        if self.closed {
            return None;
        }

        if self.delay.is_zero() {
            self.pending = None;
            return Some(value);
        }

        // Keep the start of the burst so callers can report the total wait
        let since = self.pending.as_ref().map_or(now, |p| p.since);
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
            since,
        });
        None
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Like [`poll`](Self::poll), also returning how long the burst lasted
    pub fn poll_timed(&mut self, now: Instant) -> Option<(T, Duration)> {
        let since = self.pending.as_ref()?.since;
        self.poll(now).map(|value| (value, now.saturating_duration_since(since)))
    }

    /// Time until the pending value is due, or `None` when nothing is pending
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without emitting it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Tear down: cancel anything pending and refuse further updates
    pub fn close(&mut self) {
        self.pending = None;
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(400);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_emits_only_last_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);

        let mut emitted = Vec::new();
        for (i, value) in ["t", "te", "tes", "test"].into_iter().enumerate() {
            let now = t0 + ms(100 * i as u64);
            assert_eq!(d.update(value, now), None);
            emitted.extend(d.poll(now));
        }

        // Last update at 300ms, so nothing before 700ms
        assert_eq!(d.poll(t0 + ms(699)), None);
        emitted.extend(d.poll(t0 + ms(700)));
        emitted.extend(d.poll(t0 + ms(2000)));

        assert_eq!(emitted, vec!["test"]);
    }

    #[test]
    fn single_value_emits_once_after_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.update(7, t0);

        assert_eq!(d.poll(t0 + ms(399)), None);
        assert_eq!(d.poll(t0 + DELAY), Some(7));
        assert_eq!(d.poll(t0 + ms(5000)), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn zero_delay_passes_through() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::ZERO);
        assert_eq!(d.update("a", t0), Some("a"));
        assert_eq!(d.update("b", t0), Some("b"));
        assert_eq!(d.poll(t0), None);
    }

    #[test]
    fn identical_values_are_not_suppressed() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.update("x", t0);
        assert_eq!(d.poll(t0 + DELAY), Some("x"));
        d.update("x", t0 + DELAY);
        assert_eq!(d.poll(t0 + DELAY * 2), Some("x"));
    }

    #[test]
    fn time_remaining_tracks_latest_update() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        assert_eq!(d.time_remaining(t0), None);

        d.update(1, t0);
        d.update(2, t0 + ms(100));
        assert_eq!(d.time_remaining(t0 + ms(200)), Some(ms(300)));
        assert_eq!(d.time_remaining(t0 + ms(900)), Some(Duration::ZERO));
    }

    #[test]
    fn poll_timed_reports_burst_length() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.update("a", t0);
        d.update("ab", t0 + ms(150));
        assert_eq!(d.poll_timed(t0 + ms(550)), Some(("ab", ms(550))));
    }

    #[test]
    fn cancel_discards_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.update("gone", t0);
        assert_eq!(d.cancel(), Some("gone"));
        assert_eq!(d.poll(t0 + DELAY), None);
    }

    #[test]
    fn close_prevents_any_later_emission() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.update("stale", t0);
        d.close();

        assert!(d.is_closed());
        assert_eq!(d.poll(t0 + DELAY), None);
        assert_eq!(d.update("late", t0 + DELAY), None);
        assert_eq!(d.poll(t0 + DELAY * 3), None);
    }
}
