// src/services/timer_service.rs
//
// One-shot timers for the deferred per-layer transitions.
// Timers are keyed so everything pending for a tile can be cancelled at
// once when the tile is torn down. Timers due at the same instant fire
// in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Timer<K, E> {
    due: f64,
    sequence: u64,
    key: K,
    event: E,
}

impl<K, E> PartialEq for Timer<K, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K, E> Eq for Timer<K, E> {}

impl<K, E> PartialOrd for Timer<K, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// reversed so the max-heap pops the earliest timer first
impl<K, E> Ord for Timer<K, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Debug)]
pub struct TimerService<K, E> {
    timers: BinaryHeap<Timer<K, E>>,
    sequence: u64,
}

impl<K, E> Default for TimerService<K, E> {
    fn default() -> Self {
        Self {
            timers: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<K: PartialEq, E> TimerService<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: f64, key: K, event: E) {
        self.sequence += 1;
        self.timers.push(Timer {
            due,
            sequence: self.sequence,
            key,
            event,
        });
    }

    /// Removes and returns every timer due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: f64) -> Vec<(K, E)> {
        let mut fired = Vec::new();
        while self.timers.peek().is_some_and(|timer| timer.due <= now) {
            if let Some(timer) = self.timers.pop() {
                fired.push((timer.key, timer.event));
            }
        }
        fired
    }

    /// Drops every pending timer for `key`, returning how many were dropped.
    pub fn cancel(&mut self, key: &K) -> usize {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.key != *key);
        before - self.timers.len()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}
