//! Bounded record of completed reasoning cycles.

use std::collections::VecDeque;

use rival_core::models::HistoryEntry;

/// Ring buffer of the most recent (query, answer) pairs.
///
/// Owned by one agent instance. Capacity is fixed at construction; the
/// oldest entry is silently evicted on overflow. Nothing persists across
/// process restarts.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when the buffer is full.
    pub fn append(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries oldest-first (most recent last). Length never exceeds capacity.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry {
            query: format!("q{i}"),
            answer: format!("a{i}"),
        }
    }

    #[test]
    fn keeps_insertion_order_most_recent_last() {
        let mut buffer = HistoryBuffer::new(5);
        for i in 0..3 {
            buffer.append(entry(i));
        }
        let queries: Vec<_> = buffer.recent().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["q0", "q1", "q2"]);
    }

    #[test]
    fn overflow_evicts_the_oldest() {
        let mut buffer = HistoryBuffer::new(5);
        for i in 0..6 {
            buffer.append(entry(i));
        }
        assert_eq!(buffer.len(), 5);
        let queries: Vec<_> = buffer.recent().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["q1", "q2", "q3", "q4", "q5"]);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut buffer = HistoryBuffer::new(2);
        for i in 0..50 {
            buffer.append(entry(i));
            assert!(buffer.len() <= 2);
        }
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut buffer = HistoryBuffer::new(0);
        buffer.append(entry(0));
        assert!(buffer.is_empty());
    }
}
