//! Virtual-time timer queue.
//!
//! The page runs on a single-threaded event loop: every transition happens in
//! response to one discrete event. Timers are the only self-scheduled events,
//! so they are modeled as an ordered queue over a virtual millisecond clock.
//! Hosts move time forward with [`TimerQueue::pop_due`]; tests do the same
//! without ever sleeping.
//!
//! Timers that fall due at the same instant fire in the order they were
//! scheduled.

use std::collections::BTreeMap;

/// Identifies one scheduled timer. Returned by [`TimerQueue::schedule`] and
/// used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    due: u64,
    seq: u64,
}

impl TimerHandle {
    /// Virtual time (ms) at which this timer fires.
    pub fn due(&self) -> u64 {
        self.due
    }
}

#[derive(Debug)]
pub struct TimerQueue<K> {
    now: u64,
    seq: u64,
    pending: BTreeMap<(u64, u64), K>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `key` to fire `delay_ms` after the current time.
    pub fn schedule(&mut self, delay_ms: u64, key: K) -> TimerHandle {
        let handle = TimerHandle {
            due: self.now.saturating_add(delay_ms),
            seq: self.seq,
        };
        self.seq += 1;
        self.pending.insert((handle.due, handle.seq), key);
        handle
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&(handle.due, handle.seq)).is_some()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&(handle.due, handle.seq))
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time. Returns `None` (and moves the clock to `until`) once no
    /// timer is due.
    ///
    /// Handlers may schedule further timers between calls; those fire in the
    /// same sweep if they fall due before `until`.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerHandle, K)> {
        let first = self.pending.first_key_value().map(|(k, _)| *k);
        match first {
            Some((due, seq)) if due <= until => {
                let key = self.pending.remove(&(due, seq))?;
                self.now = self.now.max(due);
                Some((TimerHandle { due, seq }, key))
            }
            _ => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    /// Drop every pending timer, returning how many were cancelled.
    pub fn clear(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }
}
