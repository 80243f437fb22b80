use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::data_structures::entry::{write_entries, PriorityEntry};
use crate::data_structures::priority_queue::{
    check_decrease, duplicate, first_overlap, not_found, PriorityQueue,
};
use crate::{Error, Result};

/// A node of the doubly linked list, addressed by its slot in the arena
#[derive(Debug, Clone)]
struct Node<V, P> {
    entry: PriorityEntry<V, P>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Priority queue over a doubly linked list kept in ascending order
///
/// Nodes live in a dense arena (`Vec`) and link to each other by slot index.
/// Removing a node moves the last slot into the hole and patches its
/// neighbours, so every slot below `nodes.len()` is live.
///
/// - Enqueue: O(n) forward walk from the front
/// - Dequeue / peek: O(1)
/// - Change priority: O(k) backward walk from the node's old position, where
///   k is the number of entries it overtakes
#[derive(Debug, Clone)]
pub struct LinkedQueue<V, P> {
    nodes: Vec<Node<V, P>>,
    head: Option<usize>,
    tail: Option<usize>,

    /// value -> arena slot
    index: HashMap<V, usize>,
}

impl<V, P> LinkedQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        LinkedQueue {
            nodes: Vec::new(),
            head: None,
            tail: None,
            index: HashMap::new(),
        }
    }

    /// Iterates entries from the front (most urgent) to the back
    pub fn iter(&self) -> Iter<'_, V, P> {
        Iter {
            queue: self,
            cursor: self.head,
        }
    }

    /// Iterates entries from the back (least urgent) to the front
    pub fn iter_rev(&self) -> impl Iterator<Item = &PriorityEntry<V, P>> + '_ {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            let slot = cursor?;
            cursor = self.nodes[slot].prev;
            Some(&self.nodes[slot].entry)
        })
    }

    /// Links `slot` directly after `after`, or at the front when `after` is `None`
    fn link_after(&mut self, after: Option<usize>, slot: usize) {
        let next = match after {
            Some(a) => self.nodes[a].next,
            None => self.head,
        };
        self.nodes[slot].prev = after;
        self.nodes[slot].next = next;
        match after {
            Some(a) => self.nodes[a].next = Some(slot),
            None => self.head = Some(slot),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(slot),
            None => self.tail = Some(slot),
        }
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[slot].prev = None;
        self.nodes[slot].next = None;
    }

    /// Unlinks and frees a slot, compacting the arena
    fn remove_slot(&mut self, slot: usize) -> PriorityEntry<V, P> {
        self.unlink(slot);
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(slot);
        if slot != last {
            // The former last node now lives at `slot`.
            let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
            match prev {
                Some(p) => self.nodes[p].next = Some(slot),
                None => self.head = Some(slot),
            }
            match next {
                Some(n) => self.nodes[n].prev = Some(slot),
                None => self.tail = Some(slot),
            }
            self.index.insert(self.nodes[slot].entry.value.clone(), slot);
        }
        node.entry
    }

    fn push_node(&mut self, entry: PriorityEntry<V, P>) -> usize {
        let slot = self.nodes.len();
        self.index.insert(entry.value.clone(), slot);
        self.nodes.push(Node {
            entry,
            prev: None,
            next: None,
        });
        slot
    }

    /// Walks forward past `after` and returns the last node ordered before `entry`
    fn position_from(
        &self,
        mut after: Option<usize>,
        entry: &PriorityEntry<V, P>,
    ) -> Option<usize> {
        let mut cursor = match after {
            Some(a) => self.nodes[a].next,
            None => self.head,
        };
        while let Some(c) = cursor {
            if self.nodes[c].entry >= *entry {
                break;
            }
            after = Some(c);
            cursor = self.nodes[c].next;
        }
        after
    }
}

impl<V, P> Default for LinkedQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PriorityQueue<V, P> for LinkedQueue<V, P>
where
    V: Clone + Ord + Hash + Debug,
    P: Copy + Ord + Debug,
{
    fn name(&self) -> &'static str {
        "doubly linked list"
    }

    fn enqueue(&mut self, value: V, priority: P) -> Result<()> {
        if self.index.contains_key(&value) {
            return Err(duplicate(&value));
        }
        let entry = PriorityEntry::new(value, priority);
        let after = self.position_from(None, &entry);
        let slot = self.push_node(entry);
        self.link_after(after, slot);
        Ok(())
    }

    fn dequeue_entry(&mut self) -> Result<PriorityEntry<V, P>> {
        let slot = self.head.ok_or(Error::EmptyQueue)?;
        let entry = self.remove_slot(slot);
        self.index.remove(&entry.value);
        Ok(entry)
    }

    fn peek_entry(&self) -> Result<PriorityEntry<V, P>> {
        self.head
            .map(|slot| self.nodes[slot].entry.clone())
            .ok_or(Error::EmptyQueue)
    }

    fn change_priority(&mut self, value: &V, new_priority: P) -> Result<()> {
        let slot = *self.index.get(value).ok_or_else(|| not_found(value))?;
        check_decrease(self.nodes[slot].entry.priority, new_priority)?;

        let mut after = self.nodes[slot].prev;
        self.unlink(slot);
        self.nodes[slot].entry.priority = new_priority;

        // The entry can only move towards the front.
        while let Some(a) = after {
            if self.nodes[a].entry < self.nodes[slot].entry {
                break;
            }
            after = self.nodes[a].prev;
        }
        self.link_after(after, slot);
        Ok(())
    }

    fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    fn entries(&self) -> Vec<PriorityEntry<V, P>> {
        self.iter().cloned().collect()
    }

    fn merge(&mut self, other: &mut Self) -> Result<()> {
        if let Some(value) = first_overlap::<Self, V, P>(self, other) {
            return Err(duplicate(&value));
        }

        // Both lists are sorted, so the insertion cursor only moves forward.
        let incoming = other.entries();
        other.clear();
        let mut after = None;
        for entry in incoming {
            after = self.position_from(after, &entry);
            let slot = self.push_node(entry);
            self.link_after(after, slot);
            after = Some(slot);
        }
        Ok(())
    }
}

/// Front-to-back iterator over a [`LinkedQueue`]
pub struct Iter<'a, V, P> {
    queue: &'a LinkedQueue<V, P>,
    cursor: Option<usize>,
}

impl<'a, V, P> Iterator for Iter<'a, V, P> {
    type Item = &'a PriorityEntry<V, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.queue.nodes[slot];
        self.cursor = node.next;
        Some(&node.entry)
    }
}

impl<V, P> Display for LinkedQueue<V, P>
where
    V: Clone + Ord + Hash + Debug + Display,
    P: Copy + Ord + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.iter())
    }
}
