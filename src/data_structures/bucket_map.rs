use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::data_structures::entry::{write_entries, PriorityEntry};
use crate::data_structures::priority_queue::{
    check_decrease, duplicate, first_overlap, not_found, PriorityQueue,
};
use crate::{Error, Result};

/// Priority queue grouping values into buckets keyed by exact priority
///
/// Each bucket is an ordered set, so values sharing a priority come out in
/// ascending order. A separate ordered set of the distinct priorities tracks
/// which bucket is currently the most urgent.
///
/// - Enqueue / dequeue: O(log n)
/// - Change priority: O(log n), remove from the old bucket then reinsert
#[derive(Debug, Clone)]
pub struct BucketQueue<V, P> {
    /// priority -> values holding that priority
    buckets: BTreeMap<P, BTreeSet<V>>,

    /// Distinct priorities with a non-empty bucket
    priorities: BTreeSet<P>,

    /// value -> current priority
    index: HashMap<V, P>,
}

impl<V, P> BucketQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        BucketQueue {
            buckets: BTreeMap::new(),
            priorities: BTreeSet::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the number of distinct priorities currently held
    pub fn bucket_count(&self) -> usize {
        self.priorities.len()
    }

    fn insert(&mut self, value: V, priority: P) {
        self.buckets.entry(priority).or_default().insert(value);
        self.priorities.insert(priority);
    }

    fn remove(&mut self, value: &V, priority: P) {
        if let Some(bucket) = self.buckets.get_mut(&priority) {
            bucket.remove(value);
            if bucket.is_empty() {
                self.buckets.remove(&priority);
                self.priorities.remove(&priority);
            }
        }
    }
}

impl<V, P> Default for BucketQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PriorityQueue<V, P> for BucketQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn name(&self) -> &'static str {
        "bucket map"
    }

    fn enqueue(&mut self, value: V, priority: P) -> Result<()> {
        if self.index.contains_key(&value) {
            return Err(duplicate(&value));
        }
        self.index.insert(value.clone(), priority);
        self.insert(value, priority);
        Ok(())
    }

    fn dequeue_entry(&mut self) -> Result<PriorityEntry<V, P>> {
        let entry = self.peek_entry()?;
        self.remove(&entry.value, entry.priority);
        self.index.remove(&entry.value);
        Ok(entry)
    }

    fn peek_entry(&self) -> Result<PriorityEntry<V, P>> {
        let priority = *self.priorities.first().ok_or(Error::EmptyQueue)?;
        self.buckets
            .get(&priority)
            .and_then(|bucket| bucket.first())
            .map(|value| PriorityEntry::new(value.clone(), priority))
            .ok_or(Error::EmptyQueue)
    }

    fn change_priority(&mut self, value: &V, new_priority: P) -> Result<()> {
        let current = *self.index.get(value).ok_or_else(|| not_found(value))?;
        check_decrease(current, new_priority)?;
        self.remove(value, current);
        self.insert(value.clone(), new_priority);
        self.index.insert(value.clone(), new_priority);
        Ok(())
    }

    fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn clear(&mut self) {
        self.buckets.clear();
        self.priorities.clear();
        self.index.clear();
    }

    fn entries(&self) -> Vec<PriorityEntry<V, P>> {
        self.buckets
            .iter()
            .flat_map(|(&priority, bucket)| {
                bucket
                    .iter()
                    .map(move |value| PriorityEntry::new(value.clone(), priority))
            })
            .collect()
    }

    fn merge(&mut self, other: &mut Self) -> Result<()> {
        if let Some(value) = first_overlap::<Self, V, P>(self, other) {
            return Err(duplicate(&value));
        }
        for (priority, mut bucket) in std::mem::take(&mut other.buckets) {
            self.buckets.entry(priority).or_default().append(&mut bucket);
            self.priorities.insert(priority);
        }
        self.index.extend(other.index.drain());
        other.priorities.clear();
        Ok(())
    }
}

impl<V, P> Display for BucketQueue<V, P>
where
    V: Clone + Ord + Hash + Debug + Display,
    P: Copy + Ord + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, &self.entries())
    }
}
