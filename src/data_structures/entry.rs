use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

/// An immutable value/priority pair held by a priority queue
///
/// Entries are totally ordered by priority first (lower is more urgent) and by
/// value second, so two entries compare equal only when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriorityEntry<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> PriorityEntry<V, P> {
    /// Creates a new entry
    pub fn new(value: V, priority: P) -> Self {
        PriorityEntry { value, priority }
    }

    /// Splits the entry back into its parts
    pub fn into_parts(self) -> (V, P) {
        (self.value, self.priority)
    }
}

impl<V: Ord, P: Ord> PartialOrd for PriorityEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, P: Ord> Ord for PriorityEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl<V: Display, P: Display> Display for PriorityEntry<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":{}", self.value, self.priority)
    }
}

/// Writes entries in the shared brace format, e.g. `{"a":1, "b":2}`
///
/// Callers pass the entries already in ascending order.
pub(crate) fn write_entries<'a, V, P, I>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    V: Display + 'a,
    P: Display + 'a,
    I: IntoIterator<Item = &'a PriorityEntry<V, P>>,
{
    f.write_str("{")?;
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", entry)?;
    }
    f.write_str("}")
}

pub(crate) fn key_repr<V: Debug>(value: &V) -> String {
    format!("{:?}", value)
}
