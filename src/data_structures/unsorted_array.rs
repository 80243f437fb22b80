use std::collections::HashSet;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::data_structures::entry::{write_entries, PriorityEntry};
use crate::data_structures::priority_queue::{
    check_decrease, duplicate, first_overlap, not_found, PriorityQueue,
};
use crate::{Error, Result};

/// Priority queue over an unsorted dynamic array
///
/// - Enqueue: O(1) amortized (append)
/// - Dequeue / peek: O(n) linear scan for the minimum
/// - Change priority: O(n) linear scan for the value
#[derive(Debug, Clone)]
pub struct UnsortedArrayQueue<V, P> {
    /// Entries in insertion order (modulo swap-removals)
    elements: Vec<PriorityEntry<V, P>>,

    /// Held values, for duplicate detection
    keys: HashSet<V>,
}

impl<V, P> UnsortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        UnsortedArrayQueue {
            elements: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Creates a new empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        UnsortedArrayQueue {
            elements: Vec::with_capacity(capacity),
            keys: HashSet::with_capacity(capacity),
        }
    }

    fn find_value(&self, value: &V) -> Option<usize> {
        self.elements.iter().position(|entry| &entry.value == value)
    }

    fn find_next(&self) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(index, _)| index)
    }
}

impl<V, P> Default for UnsortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PriorityQueue<V, P> for UnsortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn name(&self) -> &'static str {
        "unsorted array"
    }

    fn enqueue(&mut self, value: V, priority: P) -> Result<()> {
        if !self.keys.insert(value.clone()) {
            return Err(duplicate(&value));
        }
        self.elements.push(PriorityEntry::new(value, priority));
        Ok(())
    }

    fn dequeue_entry(&mut self) -> Result<PriorityEntry<V, P>> {
        let index = self.find_next().ok_or(Error::EmptyQueue)?;
        let entry = self.elements.swap_remove(index);
        self.keys.remove(&entry.value);
        Ok(entry)
    }

    fn peek_entry(&self) -> Result<PriorityEntry<V, P>> {
        self.find_next()
            .map(|index| self.elements[index].clone())
            .ok_or(Error::EmptyQueue)
    }

    fn change_priority(&mut self, value: &V, new_priority: P) -> Result<()> {
        let index = self.find_value(value).ok_or_else(|| not_found(value))?;
        check_decrease(self.elements[index].priority, new_priority)?;
        self.elements[index].priority = new_priority;
        Ok(())
    }

    fn contains(&self, value: &V) -> bool {
        self.keys.contains(value)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.keys.clear();
    }

    fn entries(&self) -> Vec<PriorityEntry<V, P>> {
        let mut entries = self.elements.clone();
        entries.sort();
        entries
    }

    fn merge(&mut self, other: &mut Self) -> Result<()> {
        if let Some(value) = first_overlap::<Self, V, P>(self, other) {
            return Err(duplicate(&value));
        }
        self.keys.extend(other.keys.drain());
        self.elements.append(&mut other.elements);
        Ok(())
    }
}

impl<V, P> Display for UnsortedArrayQueue<V, P>
where
    V: Clone + Ord + Hash + Debug + Display,
    P: Copy + Ord + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, &self.entries())
    }
}
