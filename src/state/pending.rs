use std::collections::VecDeque;

use tracing::trace;

use crate::segment::Interval;

// Sorted by start, disjoint, never adjacent.
#[derive(Debug, Default)]
pub struct PendingStore {
    intervals: VecDeque<Interval>,
    buffered_bytes: usize,
}

impl PendingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many merges happened.
    pub fn insert(&mut self, interval: Interval) -> usize {
        let idx = self
            .intervals
            .partition_point(|existing| existing.start < interval.start);
        trace!(start = interval.start, len = interval.len(), idx, "pending insert");

        self.buffered_bytes += interval.len();
        self.intervals.insert(idx, interval);

        let mut idx = idx;
        let mut merges = 0;

        while idx > 0 && self.touches_next(idx - 1) {
            self.merge_with_next(idx - 1);
            idx -= 1;
            merges += 1;
        }

        while self.touches_next(idx) {
            self.merge_with_next(idx);
            merges += 1;
        }

        if merges > 0 {
            trace!(merges, intervals = self.intervals.len(), "pending merged");
        }
        merges
    }

    pub fn would_touch(&self, start: u64, end: u64) -> bool {
        let idx = self.intervals.partition_point(|existing| existing.start < start);
        let left = idx > 0
            && self
                .intervals
                .get(idx - 1)
                .is_some_and(|prev| prev.end() >= start);
        let right = self.intervals.get(idx).is_some_and(|next| next.start <= end);
        left || right
    }

    /// Bytes of `[start, end)` not already held by a stored interval.
    pub fn uncovered_bytes(&self, start: u64, end: u64) -> usize {
        let first = self.intervals.partition_point(|existing| existing.end() <= start);
        let covered: u64 = self
            .intervals
            .range(first..)
            .take_while(|existing| existing.start < end)
            .map(|existing| existing.end().min(end) - existing.start.max(start))
            .sum();
        (end - start - covered) as usize
    }

    pub fn front(&self) -> Option<&Interval> {
        self.intervals.front()
    }

    pub fn pop_front(&mut self) -> Option<Interval> {
        let interval = self.intervals.pop_front()?;
        self.buffered_bytes -= interval.len();
        Some(interval)
    }

    pub fn intervals(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn buffered_bytes(&self) -> usize {
        self.buffered_bytes
    }

    fn touches_next(&self, idx: usize) -> bool {
        match (self.intervals.get(idx), self.intervals.get(idx + 1)) {
            (Some(current), Some(next)) => current.touches(next),
            _ => false,
        }
    }

    fn merge_with_next(&mut self, idx: usize) {
        let Some(next) = self.intervals.remove(idx + 1) else {
            return;
        };
        let Some(slot) = self.intervals.get_mut(idx) else {
            return;
        };

        let current = std::mem::replace(slot, Interval::new(0, Vec::new()));
        self.buffered_bytes -= current.len() + next.len();
        let merged = Interval::merge(current, next);
        self.buffered_bytes += merged.len();
        *slot = merged;
    }
}
