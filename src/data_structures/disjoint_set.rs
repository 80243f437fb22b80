/// Disjoint-set forest (union-find) over dense element ids `0..n`
///
/// Uses union by rank and path compression, so `find` is effectively
/// constant time amortized. The structure is independent of any per-vertex
/// path state, so it can run against a graph without disturbing it.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements tracked
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if no elements are tracked
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the representative of the set containing `element`
    pub fn find(&mut self, mut element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[element] != element {
            let parent = self.parent[element];
            self.parent[element] = root;
            element = parent;
        }

        root
    }

    /// Returns true if both elements belong to the same set
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        self.components -= 1;
        true
    }
}
