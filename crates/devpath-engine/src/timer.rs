//! Cancellable one-shot timers for a single-threaded view.
//!
//! Nothing sleeps here: a timer is a deadline the owner checks against the
//! clock it is driven with (`pop_expired(now)`). The owner is expected to
//! cancel everything when it goes away.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<K> {
    id: TimerId,
    deadline: Instant,
    kind: K,
}

#[derive(Debug)]
pub struct TimerQueue<K> {
    // Sorted by (deadline, id); ids grow monotonically so ties keep scheduling order.
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: K, deadline: Instant) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let index = self
            .entries
            .partition_point(|entry| (entry.deadline, entry.id) <= (deadline, id));
        self.entries.insert(index, Entry { id, deadline, kind });
        id
    }

    /// Returns false when the timer already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every pending timer, returning how many were pending
    pub fn cancel_all(&mut self) -> usize {
        let pending = self.entries.len();
        self.entries.clear();
        pending
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.first().map(|entry| entry.deadline)
    }

    /// Remove and return every timer whose deadline is at or before `now`
    pub fn pop_expired(&mut self, now: Instant) -> Vec<K> {
        let due = self
            .entries
            .partition_point(|entry| entry.deadline <= now);
        self.entries.drain(..due).map(|entry| entry.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
