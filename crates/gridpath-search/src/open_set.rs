use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by `(priority, seq)`, smallest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    priority: u32,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first, and
        // among equal priorities the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A stable min-priority queue of arena indices with O(1) membership.
///
/// Ties between equal priorities are broken by insertion order using a
/// strictly increasing counter, so the pop order is fully deterministic.
/// An index is queued at most once; its priority is fixed when it is pushed.
#[derive(Debug, Clone)]
pub struct OpenSet {
    heap: BinaryHeap<Entry>,
    queued: Vec<bool>,
    counter: u64,
}

impl OpenSet {
    /// Create an empty open set for indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: vec![false; capacity],
            counter: 0,
        }
    }

    /// Queue `idx` with `priority`. Returns `false`, leaving the set
    /// untouched, if `idx` is already queued.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below the capacity given to [`new`](Self::new).
    pub fn push(&mut self, idx: usize, priority: u32) -> bool {
        if self.queued[idx] {
            return false;
        }
        self.queued[idx] = true;
        self.counter += 1;
        self.heap.push(Entry {
            priority,
            seq: self.counter,
            idx,
        });
        true
    }

    /// Remove and return the index with the smallest `(priority, seq)`.
    pub fn pop(&mut self) -> Option<usize> {
        let e = self.heap.pop()?;
        self.queued[e.idx] = false;
        Some(e.idx)
    }

    /// Whether `idx` is currently queued.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.queued.get(idx).copied().unwrap_or(false)
    }

    /// Number of queued indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_priority_first() {
        let mut open = OpenSet::new(8);
        open.push(3, 5);
        open.push(1, 2);
        open.push(7, 9);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(3));
        assert_eq!(open.pop(), Some(7));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut open = OpenSet::new(8);
        for idx in [6, 2, 4, 0] {
            open.push(idx, 1);
        }
        let order: Vec<usize> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(order, vec![6, 2, 4, 0]);
    }

    #[test]
    fn membership_tracks_push_and_pop() {
        let mut open = OpenSet::new(4);
        assert!(!open.contains(2));
        open.push(2, 0);
        assert!(open.contains(2));
        assert_eq!(open.len(), 1);
        open.pop();
        assert!(!open.contains(2));
        assert!(open.is_empty());
        assert!(!open.contains(100));
    }

    #[test]
    fn pushing_a_queued_index_keeps_its_first_priority() {
        let mut open = OpenSet::new(4);
        assert!(open.push(0, 10));
        assert!(open.push(1, 5));
        assert!(!open.push(0, 1));
        assert_eq!(open.len(), 2);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), None);
        // Once popped, an index may be queued again.
        assert!(open.push(0, 3));
        assert_eq!(open.pop(), Some(0));
    }
}
