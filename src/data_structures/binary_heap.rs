use std::collections::HashSet;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::data_structures::entry::{write_entries, PriorityEntry};
use crate::data_structures::priority_queue::{
    check_decrease, duplicate, first_overlap, not_found, PriorityQueue,
};
use crate::{Error, Result};

/// Array-backed binary min-heap
///
/// Positions are 1-indexed: the root is position 1, the children of `i` are
/// `2i` and `2i + 1`. Position `i` is stored at `heap[i - 1]`.
///
/// - Enqueue: O(log n) append + sift up
/// - Dequeue: O(log n) swap root with last, shrink, sift down
/// - Change priority: O(n) linear scan to locate the value, then sift up
#[derive(Debug, Clone)]
pub struct BinaryHeapQueue<V, P> {
    heap: Vec<PriorityEntry<V, P>>,
    keys: HashSet<V>,
}

impl<V, P> BinaryHeapQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        BinaryHeapQueue {
            heap: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapQueue {
            heap: Vec::with_capacity(capacity),
            keys: HashSet::with_capacity(capacity),
        }
    }

    fn at(&self, position: usize) -> &PriorityEntry<V, P> {
        &self.heap[position - 1]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a - 1, b - 1);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 1 {
            let parent = position / 2;
            if self.at(position) >= self.at(parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let size = self.heap.len();
        loop {
            let left = position * 2;
            if left > size {
                break;
            }
            let right = left + 1;
            let urgent = if right <= size && self.at(right) < self.at(left) {
                right
            } else {
                left
            };
            if self.at(urgent) >= self.at(position) {
                break;
            }
            self.swap(urgent, position);
            position = urgent;
        }
    }

    /// Restores the heap property over the whole array (Floyd's construction)
    fn heapify(&mut self) {
        for position in (1..=self.heap.len() / 2).rev() {
            self.sift_down(position);
        }
    }

    /// Returns true if every parent is ordered before its children
    pub fn is_valid_heap(&self) -> bool {
        (2..=self.heap.len()).all(|position| self.at(position / 2) < self.at(position))
    }
}

impl<V, P> Default for BinaryHeapQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PriorityQueue<V, P> for BinaryHeapQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn name(&self) -> &'static str {
        "binary heap"
    }

    fn enqueue(&mut self, value: V, priority: P) -> Result<()> {
        if !self.keys.insert(value.clone()) {
            return Err(duplicate(&value));
        }
        self.heap.push(PriorityEntry::new(value, priority));
        let last = self.heap.len();
        self.sift_up(last);
        Ok(())
    }

    fn dequeue_entry(&mut self) -> Result<PriorityEntry<V, P>> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len();
        self.swap(1, last);
        let entry = self.heap.pop().ok_or(Error::EmptyQueue)?;
        if !self.heap.is_empty() {
            self.sift_down(1);
        }
        self.keys.remove(&entry.value);
        Ok(entry)
    }

    fn peek_entry(&self) -> Result<PriorityEntry<V, P>> {
        self.heap.first().cloned().ok_or(Error::EmptyQueue)
    }

    fn change_priority(&mut self, value: &V, new_priority: P) -> Result<()> {
        let index = self
            .heap
            .iter()
            .position(|entry| &entry.value == value)
            .ok_or_else(|| not_found(value))?;
        check_decrease(self.heap[index].priority, new_priority)?;
        self.heap[index].priority = new_priority;
        self.sift_up(index + 1);
        Ok(())
    }

    fn contains(&self, value: &V) -> bool {
        self.keys.contains(value)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.keys.clear();
    }

    fn entries(&self) -> Vec<PriorityEntry<V, P>> {
        let mut entries = self.heap.clone();
        entries.sort();
        entries
    }

    fn merge(&mut self, other: &mut Self) -> Result<()> {
        if let Some(value) = first_overlap::<Self, V, P>(self, other) {
            return Err(duplicate(&value));
        }
        self.heap.append(&mut other.heap);
        self.keys.extend(other.keys.drain());
        self.heapify();
        Ok(())
    }
}

impl<V, P> Display for BinaryHeapQueue<V, P>
where
    V: Clone + Ord + Hash + Debug + Display,
    P: Copy + Ord + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, &self.entries())
    }
}
