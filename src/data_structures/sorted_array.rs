use std::collections::{HashMap, VecDeque};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::data_structures::entry::{write_entries, PriorityEntry};
use crate::data_structures::priority_queue::{
    check_decrease, duplicate, first_overlap, not_found, PriorityQueue,
};
use crate::{Error, Result};

/// Priority queue over a dynamic array kept in ascending order
///
/// - Enqueue: O(n) (binary search, then shift)
/// - Dequeue / peek: O(1) at the front
/// - Change priority: O(n) remove-then-reinsert
#[derive(Debug, Clone)]
pub struct SortedArrayQueue<V, P> {
    /// Entries in ascending `(priority, value)` order
    elements: VecDeque<PriorityEntry<V, P>>,

    /// Current priority of every held value
    priorities: HashMap<V, P>,
}

impl<V, P> SortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        SortedArrayQueue {
            elements: VecDeque::new(),
            priorities: HashMap::new(),
        }
    }

    /// Position of an entry, or where it would be inserted
    fn locate(&self, entry: &PriorityEntry<V, P>) -> std::result::Result<usize, usize> {
        self.elements.binary_search(entry)
    }

    fn insert(&mut self, entry: PriorityEntry<V, P>) {
        let index = match self.locate(&entry) {
            Ok(index) | Err(index) => index,
        };
        self.elements.insert(index, entry);
    }
}

impl<V, P> Default for SortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PriorityQueue<V, P> for SortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn name(&self) -> &'static str {
        "sorted array"
    }

    fn enqueue(&mut self, value: V, priority: P) -> Result<()> {
        if self.priorities.contains_key(&value) {
            return Err(duplicate(&value));
        }
        self.priorities.insert(value.clone(), priority);
        self.insert(PriorityEntry::new(value, priority));
        Ok(())
    }

    fn dequeue_entry(&mut self) -> Result<PriorityEntry<V, P>> {
        let entry = self.elements.pop_front().ok_or(Error::EmptyQueue)?;
        self.priorities.remove(&entry.value);
        Ok(entry)
    }

    fn peek_entry(&self) -> Result<PriorityEntry<V, P>> {
        self.elements.front().cloned().ok_or(Error::EmptyQueue)
    }

    fn change_priority(&mut self, value: &V, new_priority: P) -> Result<()> {
        let current = *self.priorities.get(value).ok_or_else(|| not_found(value))?;
        check_decrease(current, new_priority)?;

        let old = PriorityEntry::new(value.clone(), current);
        if let Ok(index) = self.locate(&old) {
            self.elements.remove(index);
        }
        self.priorities.insert(value.clone(), new_priority);
        self.insert(PriorityEntry::new(value.clone(), new_priority));
        Ok(())
    }

    fn contains(&self, value: &V) -> bool {
        self.priorities.contains_key(value)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.priorities.clear();
    }

    fn entries(&self) -> Vec<PriorityEntry<V, P>> {
        self.elements.iter().cloned().collect()
    }

    fn merge(&mut self, other: &mut Self) -> Result<()> {
        if let Some(value) = first_overlap::<Self, V, P>(self, other) {
            return Err(duplicate(&value));
        }

        // Standard two-way merge of sorted runs.
        let mut merged = VecDeque::with_capacity(self.elements.len() + other.elements.len());
        let mut left = std::mem::take(&mut self.elements).into_iter().peekable();
        let mut right = std::mem::take(&mut other.elements).into_iter().peekable();
        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some(a), Some(b)) => a < b,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let next = if take_left { left.next() } else { right.next() };
            merged.extend(next);
        }

        self.elements = merged;
        self.priorities.extend(other.priorities.drain());
        Ok(())
    }
}

impl<V, P> Display for SortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug + Display,
    P: Copy + Ord + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, &self.elements)
    }
}
