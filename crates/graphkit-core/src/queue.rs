//! Min-priority queue with deterministic tie-breaking.
//!
//! Entries are ordered ascending by an `f64` key (IEEE total order via
//! [`f64::total_cmp`]) and then by insertion sequence number, so entries with
//! equal keys come out first-in first-out. Decrease-key is not supported;
//! callers push a fresh entry and skip stale ones on pop.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
struct Entry<T> {
    key: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Binary-heap backed min-queue keyed by `f64`.
#[derive(Debug, Clone)]
pub struct MinQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinQueue<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert `item` with priority `key`. O(log n).
    pub fn push(&mut self, key: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { key, seq, item }));
    }

    /// Remove and return the entry with the smallest key; the earliest
    /// inserted among equal keys. O(log n).
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.key, entry.item))
    }

    /// Smallest key currently queued.
    #[must_use]
    pub fn peek_key(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::MinQueue;

    #[test]
    fn pops_in_ascending_key_order() {
        let mut q = MinQueue::new();
        q.push(3.0, 'c');
        q.push(1.0, 'a');
        q.push(2.0, 'b');

        let order: Vec<char> = std::iter::from_fn(|| q.pop().map(|(_, c)| c)).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn equal_keys_pop_in_insertion_order() {
        let mut q = MinQueue::new();
        for name in ["first", "second", "third"] {
            q.push(5.0, name);
        }
        q.push(1.0, "min");

        assert_eq!(q.pop(), Some((1.0, "min")));
        assert_eq!(q.pop(), Some((5.0, "first")));
        assert_eq!(q.pop(), Some((5.0, "second")));
        assert_eq!(q.pop(), Some((5.0, "third")));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn peek_and_len_track_contents() {
        let mut q = MinQueue::with_capacity(4);
        assert!(q.is_empty());
        assert_eq!(q.peek_key(), None);

        q.push(2.5, ());
        q.push(0.5, ());
        assert_eq!(q.len(), 2);
        assert_eq!(q.peek_key(), Some(0.5));
    }

    #[test]
    fn infinity_sorts_last() {
        let mut q = MinQueue::new();
        q.push(f64::INFINITY, "far");
        q.push(0.0, "near");
        assert_eq!(q.pop().map(|(_, v)| v), Some("near"));
        assert_eq!(q.pop().map(|(_, v)| v), Some("far"));
    }
}
