//! Cancellable one-shot timers owned by an engine instance
//!
//! A [`TimerSet`] holds pending deadlines tagged with a caller-defined kind.
//! Nothing fires on its own: the owning engine drains due entries from its
//! `tick`, which keeps every timer effect on the caller's thread and makes
//! teardown a matter of clearing the set.

use std::time::{Duration, Instant};

/// Handle to a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct PendingTimer<K> {
    handle: TimerHandle,
    deadline: Instant,
    kind: K,
}

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredTimer<K> {
    pub handle: TimerHandle,
    pub deadline: Instant,
    pub kind: K,
}

#[derive(Debug)]
pub struct TimerSet<K> {
    next_handle: u64,
    pending: Vec<PendingTimer<K>>,
}

impl<K> Default for TimerSet<K> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::new(),
        }
    }
}

impl<K> TimerSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, kind: K) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingTimer {
            handle,
            deadline,
            kind,
        });
        handle
    }

    /// Schedule `kind` to fire `delay` after `now`.
    pub fn schedule_after(
        &mut self,
        now: Instant,
        delay: Duration,
        kind: K,
    ) -> TimerHandle {
        self.schedule_at(now + delay, kind)
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.handle != handle);
        self.pending.len() != before
    }

    /// Cancel every pending timer matching `predicate`.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&K) -> bool) {
        self.pending.retain(|timer| !predicate(&timer.kind));
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|timer| timer.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|timer| timer.deadline).min()
    }

    /// Remove and return the earliest timer due at `now`.
    ///
    /// Timers with equal deadlines come out in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<FiredTimer<K>> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= now)
            .min_by_key(|(_, timer)| (timer.deadline, timer.handle))
            .map(|(position, _)| position)?;

        let timer = self.pending.remove(position);
        Some(FiredTimer {
            handle: timer.handle,
            deadline: timer.deadline,
            kind: timer.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_in_deadline_then_schedule_order() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule_after(start, ms(30), "late");
        timers.schedule_after(start, ms(10), "first");
        timers.schedule_after(start, ms(10), "second");

        let now = start + ms(50);
        let order: Vec<_> = std::iter::from_fn(|| timers.pop_due(now))
            .map(|fired| fired.kind)
            .collect();
        assert_eq!(order, vec!["first", "second", "late"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule_after(start, ms(100), ());

        assert!(timers.pop_due(start + ms(99)).is_none());
        assert!(timers.pop_due(start + ms(100)).is_some());
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        let keep = timers.schedule_after(start, ms(10), 1);
        let drop = timers.schedule_after(start, ms(10), 2);

        assert!(timers.cancel(drop));
        assert!(!timers.cancel(drop));
        assert!(timers.is_pending(keep));

        let fired = timers.pop_due(start + ms(20)).map(|f| f.kind);
        assert_eq!(fired, Some(1));
        assert!(timers.pop_due(start + ms(20)).is_none());
    }

    #[test]
    fn cancel_where_filters_by_kind() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule_after(start, ms(5), "a");
        timers.schedule_after(start, ms(5), "b");
        timers.cancel_where(|kind| *kind == "a");

        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(start + ms(5)));
    }
}
