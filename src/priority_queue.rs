//! Stable array-backed binary min-heap.
//!
//! A dense `Vec` of entries implicitly encodes a complete binary tree:
//! the parent of index `i` is `(i - 1) / 2`, its children `2i + 1` and
//! `2i + 2`. Every entry carries the queue-local insertion sequence, and
//! ordering is priority first, sequence second, so equal priorities
//! dequeue in FIFO order (stable, not arbitrary). The std `BinaryHeap`
//! offers neither stability nor `PartialOrd` priorities, which is why
//! this queue exists.
//!
//! Priorities only need `PartialOrd`; an incomparable pair (e.g. a NaN
//! `f64`) orders as equal and falls through to the sequence tie-break.

use core::fmt;

/// Error returned by [`PriorityQueue::dequeue`] and [`PriorityQueue::peek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue was empty. Surfaced, never papered over with a default.
    Underflow,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Underflow => f.write_str("dequeue or peek on an empty priority queue"),
        }
    }
}

impl std::error::Error for QueueError {}

#[derive(Debug, Clone)]
struct HeapEntry<T, P> {
    value: T,
    priority: P,
    seq: u64,
}

impl<T, P: PartialOrd> HeapEntry<T, P> {
    /// Strict "dequeues before" ordering: priority, then insertion
    /// sequence. Total because sequences are unique per queue.
    fn precedes(&self, other: &Self) -> bool {
        match self.priority.partial_cmp(&other.priority) {
            Some(core::cmp::Ordering::Less) => true,
            Some(core::cmp::Ordering::Greater) => false,
            _ => self.seq < other.seq,
        }
    }
}

/// Min-priority queue with FIFO order among equal priorities.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = f64> {
    heap: Vec<HeapEntry<T, P>>,
    seq: u64,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: Vec::new(),
            seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Appends the entry and sifts it up. O(log n).
    pub fn enqueue(&mut self, value: T, priority: P) {
        let entry = HeapEntry {
            value,
            priority,
            seq: self.seq,
        };
        self.seq += 1;
        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the minimum-priority value. O(log n).
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Underflow);
        }
        // The last element replaces the root, then sinks.
        let entry = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(entry.value)
    }

    /// The minimum-priority value, without removing it. O(1).
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.heap
            .first()
            .map(|entry| &entry.value)
            .ok_or(QueueError::Underflow)
    }

    /// The priority that [`peek`](Self::peek) would dequeue at.
    pub fn peek_priority(&self) -> Result<&P, QueueError> {
        self.heap
            .first()
            .map(|entry| &entry.priority)
            .ok_or(QueueError::Underflow)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.heap[index].precedes(&self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < self.heap.len() && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
