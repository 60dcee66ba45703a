//! Binary min-heap priority queue
//!
//! [`MinQueue`] keeps its (key, value) entries in a flat vector arranged as
//! an implicit binary tree: the entry at index `i` has its parent at
//! `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. Every parent key
//! is less than or equal to its children's keys, so the minimum entry is
//! always at index 0.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `enqueue`  | O(log n)   |
//! | `dequeue`  | O(log n)   |
//! | `peek`     | O(1)       |
//! | `len`      | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use minqueue::MinQueue;
//!
//! let mut queue = MinQueue::new();
//! queue.enqueue(3, "three");
//! queue.enqueue(1, "one");
//! queue.enqueue(2, "two");
//!
//! assert_eq!(queue.peek(), (&1, &"one"));
//! assert_eq!(queue.dequeue(), (1, "one"));
//! assert_eq!(queue.dequeue(), (2, "two"));
//! assert_eq!(queue.dequeue(), (3, "three"));
//! assert!(queue.is_empty());
//! ```

/// A priority queue backed by a binary min-heap
///
/// The queue stores (key, value) entries and always surfaces the entry with
/// the minimum key first. Keys must implement [`Ord`]; values are opaque
/// payloads and never take part in comparisons.
///
/// Entries with equal keys are all dequeued before any entry with a larger
/// key, but their order relative to each other is unspecified.
#[derive(Debug, Clone)]
pub struct MinQueue<K: Ord, V> {
    /// Entries stored as a vector of (key, value) pairs in heap order
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> MinQueue<K, V> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        MinQueue {
            entries: Vec::new(),
        }
    }

    /// Creates an empty queue with space preallocated for at least
    /// `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the queue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the queue contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the queue can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Removes all entries, keeping the allocated storage for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Adds an entry to the queue.
    ///
    /// The entry is appended as the last leaf of the tree and sifted up
    /// until its parent's key is no larger than its own.
    pub fn enqueue(&mut self, key: K, value: V) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Use
    /// [`try_dequeue`](MinQueue::try_dequeue) to handle the empty case
    /// without panicking.
    pub fn dequeue(&mut self) -> (K, V) {
        match self.try_dequeue() {
            Some(entry) => entry,
            None => panic!("dequeue called on an empty MinQueue"),
        }
    }

    /// Removes and returns the entry with the minimum key, or `None` if the
    /// queue is empty.
    ///
    /// The root is replaced by the last leaf, which is then sifted down
    /// until neither child's key is smaller than its own.
    pub fn try_dequeue(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }

        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Returns the entry with the minimum key without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Use [`try_peek`](MinQueue::try_peek)
    /// to handle the empty case without panicking.
    pub fn peek(&self) -> (&K, &V) {
        match self.try_peek() {
            Some(entry) => entry,
            None => panic!("peek called on an empty MinQueue"),
        }
    }

    /// Returns the entry with the minimum key without removing it, or
    /// `None` if the queue is empty.
    pub fn try_peek(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Moves the entry at `index` toward the root until its parent's key is
    /// less than or equal to its own.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 < self.entries[parent].0 {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `index` toward the leaves, swapping it with its
    /// smaller child until neither child's key is less than its own.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }

            if smallest != index {
                self.entries.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    /// Verifies the heap invariant over the whole backing vector.
    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[(i - 1) / 2].0 <= self.entries[i].0)
    }
}

impl<K: Ord, V> Default for MinQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for MinQueue<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.enqueue(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MinQueue<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = MinQueue::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            queue.enqueue(key, value);
        }
        queue
    }
}
