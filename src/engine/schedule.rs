//! Deadline timers polled from the frame loop. Nothing here sleeps or spawns.
use std::time::Duration;

use crate::utils::AppInstant;

/// Recurring timer. Owned by whoever must stop it; `cancel` is final.
#[derive(Debug)]
pub struct Interval {
    period: Duration,
    next_due: Option<AppInstant>,
}

impl Interval {
    pub fn start(period: Duration, now: AppInstant) -> Self {
        Self {
            period,
            next_due: Some(now + period),
        }
    }

    pub fn next_due(&self) -> Option<AppInstant> {
        self.next_due
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// True when a period has elapsed. Fires at most once per call: after a stall
    /// the missed periods are dropped and the schedule re-anchors on `now`.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + self.period;
        self.next_due = Some(if next <= now { now + self.period } else { next });
        true
    }
}

/// A one-shot commit released once its delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    due: AppInstant,
}

impl Deferred {
    pub fn after(delay: Duration, now: AppInstant) -> Self {
        Self { due: now + delay }
    }

    pub fn due(&self) -> AppInstant {
        self.due
    }

    pub fn is_due(&self, now: AppInstant) -> bool {
        now >= self.due
    }
}

/// Empty `slot` and return true if its commit is due.
pub fn take_if_due(slot: &mut Option<Deferred>, now: AppInstant) -> bool {
    if slot.as_ref().is_some_and(|d| d.is_due(now)) {
        *slot = None;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn interval_fires_once_per_period() {
        let t0 = AppInstant::now();
        let mut iv = Interval::start(5 * SEC, t0);
        assert!(!iv.poll(t0));
        assert!(!iv.poll(t0 + 4 * SEC));
        assert!(iv.poll(t0 + 5 * SEC));
        assert!(!iv.poll(t0 + 6 * SEC));
        assert!(iv.poll(t0 + 10 * SEC));
        assert_eq!(iv.next_due(), Some(t0 + 15 * SEC));
    }

    #[test]
    fn interval_reanchors_after_stall() {
        let t0 = AppInstant::now();
        let mut iv = Interval::start(5 * SEC, t0);
        assert!(iv.poll(t0 + 60 * SEC));
        assert!(!iv.poll(t0 + 61 * SEC));
        assert_eq!(iv.next_due(), Some(t0 + 65 * SEC));
    }

    #[test]
    fn cancelled_interval_never_fires() {
        let t0 = AppInstant::now();
        let mut iv = Interval::start(SEC, t0);
        iv.cancel();
        assert_eq!(iv.next_due(), None);
        assert!(!iv.poll(t0 + 100 * SEC));
    }

    #[test]
    fn deferred_releases_only_after_delay() {
        let t0 = AppInstant::now();
        let mut slot = Some(Deferred::after(SEC, t0));
        assert!(!take_if_due(&mut slot, t0));
        assert_eq!(slot.map(|d| d.due()), Some(t0 + SEC));
        assert!(take_if_due(&mut slot, t0 + SEC));
        assert!(slot.is_none());
        assert!(!take_if_due(&mut slot, t0 + 2 * SEC));
    }
}
