use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::entry::{key_repr, PriorityEntry};
use crate::{Error, Result};

/// The contract shared by every priority queue representation
///
/// A queue maps unique values to priorities. `peek` always names the entry with
/// the smallest `(priority, value)` pair, so every implementation produces the
/// same dequeue order for the same sequence of operations.
pub trait PriorityQueue<V, P>: Default + Debug
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    /// Human-readable name of the representation
    fn name(&self) -> &'static str;

    /// Inserts a new value. Fails with `DuplicateKey` if the value is already held.
    fn enqueue(&mut self, value: V, priority: P) -> Result<()>;

    /// Removes and returns the most urgent entry
    fn dequeue_entry(&mut self) -> Result<PriorityEntry<V, P>>;

    /// Returns the most urgent entry without removing it
    fn peek_entry(&self) -> Result<PriorityEntry<V, P>>;

    /// Lowers the priority of a held value.
    ///
    /// Fails with `NotFound` when the value is absent and with `InvalidPriority`
    /// when `new_priority` is greater than the current priority.
    fn change_priority(&mut self, value: &V, new_priority: P) -> Result<()>;

    /// Returns true if the value is currently held
    fn contains(&self, value: &V) -> bool;

    /// Returns the number of held entries
    fn len(&self) -> usize;

    /// Removes every entry
    fn clear(&mut self);

    /// Snapshot of all held entries in ascending order
    fn entries(&self) -> Vec<PriorityEntry<V, P>>;

    /// Moves every entry of `other` into this queue, leaving `other` empty.
    ///
    /// Fails with `DuplicateKey` (and leaves both queues untouched) if the two
    /// value sets overlap.
    fn merge(&mut self, other: &mut Self) -> Result<()>;

    /// Removes and returns the most urgent value
    fn dequeue(&mut self) -> Result<V> {
        self.dequeue_entry().map(|entry| entry.value)
    }

    /// Returns the most urgent value
    fn peek(&self) -> Result<V> {
        self.peek_entry().map(|entry| entry.value)
    }

    /// Returns the priority of the most urgent value
    fn peek_priority(&self) -> Result<P> {
        self.peek_entry().map(|entry| entry.priority)
    }

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects a new queue from value/priority pairs
    fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, P)>,
    {
        let mut queue = Self::default();
        for (value, priority) in pairs {
            queue.enqueue(value, priority)?;
        }
        Ok(queue)
    }
}

/// Validates a priority change against the current priority
pub(crate) fn check_decrease<P: Ord + Debug>(current: P, requested: P) -> Result<()> {
    if requested > current {
        return Err(Error::InvalidPriority {
            current: format!("{:?}", current),
            requested: format!("{:?}", requested),
        });
    }
    Ok(())
}

pub(crate) fn duplicate<V: Debug>(value: &V) -> Error {
    Error::DuplicateKey(key_repr(value))
}

pub(crate) fn not_found<V: Debug>(value: &V) -> Error {
    Error::NotFound(key_repr(value))
}

/// Finds the first value of `other` that `queue` already holds
pub(crate) fn first_overlap<Q, V, P>(queue: &Q, other: &Q) -> Option<V>
where
    Q: PriorityQueue<V, P>,
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    // Iterate the smaller side.
    let (small, large) = if queue.len() <= other.len() {
        (queue, other)
    } else {
        (other, queue)
    };
    small
        .entries()
        .into_iter()
        .map(|entry| entry.value)
        .find(|value| large.contains(value))
}
