use std::collections::BTreeSet;
use std::fmt::Debug;

use log::warn;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::{Error, Result};

/// Trait for single-pair path-finding algorithms
///
/// Implementations reset the graph's vertex state before running and leave
/// the per-vertex state of the run behind for inspection.
pub trait PathFinder<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Finds a path from `start` to `end` as a sequence of vertices.
    ///
    /// Returns an empty path if `end` is unreachable.
    fn find_path(&self, graph: &mut G, start: usize, end: usize) -> Result<Vec<usize>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Edges selected by a spanning tree algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    /// Edge ids in the order they were selected
    pub edges: Vec<usize>,

    /// Sum of the selected edge costs, added in edge id order once the
    /// algorithm finishes so equal edge sets report equal totals
    pub total_cost: W,
}

impl<W> SpanningTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty tree
    pub fn new() -> Self {
        SpanningTree {
            edges: Vec::new(),
            total_cost: W::zero(),
        }
    }

    /// Adds an edge to the tree
    pub fn push(&mut self, edge: usize, cost: W) {
        self.edges.push(edge);
        self.total_cost = self.total_cost + cost;
    }

    /// Returns the number of edges in the tree
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the selected edge ids as a set
    pub fn edge_set(&self) -> BTreeSet<usize> {
        self.edges.iter().copied().collect()
    }

    /// Recomputes `total_cost` from the graph, summing in edge id order
    pub(crate) fn settle<G: Graph<W>>(&mut self, graph: &G) {
        self.total_cost = self
            .edge_set()
            .into_iter()
            .filter_map(|id| graph.edge(id))
            .fold(W::zero(), |total, edge| total + edge.cost);
    }
}

impl<W> Default for SpanningTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for minimum spanning tree algorithms
pub trait SpanningTreeAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Computes a minimum spanning tree (or forest, where supported) of the graph
    fn spanning_tree(&self, graph: &mut G) -> Result<SpanningTree<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Fails with `InvalidVertex` unless both endpoints exist
pub(crate) fn check_endpoints<W, G>(graph: &G, start: usize, end: usize) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    for vertex in [start, end] {
        if !graph.has_vertex(vertex) {
            return Err(Error::InvalidVertex(vertex));
        }
    }
    Ok(())
}

/// Rebuilds the path ending at `end` by following predecessor links
pub(crate) fn reconstruct_path<W, G>(graph: &G, end: usize) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let mut path = vec![end];
    let mut current = end;

    while let Some(previous) = graph.vertex(current)?.previous {
        // A predecessor chain longer than the graph means a cycle
        if path.len() > graph.vertex_count() {
            warn!("Cycle detected in path reconstruction at vertex {}", current);
            return Ok(Vec::new());
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    Ok(path)
}
