//! Delayed-task abstraction backing the panel's timer simulations.
//!
//! Instead of ad-hoc wall-clock timers, scheduled work is held as data in a
//! [`TimerQueue`] against a virtual clock. The embedding shell advances the
//! queue from its event loop (real elapsed time); tests advance it
//! deterministically without sleeping. Cancelling a handle, or the whole
//! queue on teardown, guarantees the event never fires late.

use std::time::Duration;

/// Cancellation handle for a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

struct TimerEntry<E> {
    id: u64,
    fires_at: Duration,
    event: E,
}

/// Ordered queue of delayed events against a virtual clock.
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    entries: Vec<TimerEntry<E>>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `event` to fire after `delay` of virtual time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            fires_at: self.now + delay,
            event,
        });
        TimerHandle(id)
    }

    /// Cancel a scheduled event. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != handle.0);
        self.entries.len() < before
    }

    /// Cancel everything still pending. Used on panel teardown.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Advance the clock by `elapsed` and return the events that came due,
    /// in firing order (deadline, then scheduling order).
    pub fn advance(&mut self, elapsed: Duration) -> Vec<E> {
        self.now += elapsed;
        let now = self.now;

        let mut due: Vec<TimerEntry<E>> = Vec::new();
        let mut remaining: Vec<TimerEntry<E>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.fires_at <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|e| (e.fires_at, e.id));
        due.into_iter().map(|e| e.event).collect()
    }

    /// Number of events still pending.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Virtual time remaining until the next event, if any. Lets a shell
    /// sleep exactly until the next deadline instead of polling.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|e| e.fires_at.saturating_sub(self.now))
            .min()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
