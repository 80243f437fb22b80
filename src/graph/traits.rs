use std::fmt::Debug;
use std::ops::Range;

use num_traits::{Float, Zero};

use crate::graph::vertex::{Edge, VertexState};
use crate::Result;

/// Trait representing a weighted graph with per-vertex traversal state
///
/// Algorithms never change the topology through this trait; they only mutate
/// the [`VertexState`] of each vertex and call [`Graph::reset_data`] before a run.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns the ids of all vertices
    fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Returns an iterator over `(neighbor, cost)` pairs reachable from a vertex
    /// in one step, in insertion order
    fn incident_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over the neighbors of a vertex
    fn neighbors<'a>(&'a self, vertex: usize) -> Box<dyn Iterator<Item = usize> + 'a>
    where
        W: 'a,
    {
        Box::new(self.incident_edges(vertex).map(|(neighbor, _)| neighbor))
    }

    /// Returns every edge; an edge's id is its position in this slice
    fn edges(&self) -> &[Edge<W>];

    /// Returns the edge with the given id
    fn edge(&self, id: usize) -> Option<&Edge<W>> {
        self.edges().get(id)
    }

    /// Returns the edge leading from `from` to `to`, if any
    fn find_edge(&self, from: usize, to: usize) -> Option<&Edge<W>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.find_edge(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.find_edge(from, to).map(|edge| edge.cost)
    }

    /// Returns the traversal state of a vertex
    fn vertex(&self, vertex: usize) -> Result<&VertexState<W>>;

    /// Returns the traversal state of a vertex for mutation
    fn vertex_mut(&mut self, vertex: usize) -> Result<&mut VertexState<W>>;

    /// Restores every vertex to its initial traversal state
    fn reset_data(&mut self);
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds an edge between vertices with the given weight and returns its ID.
    ///
    /// Adding an edge that already exists updates its weight instead.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<usize>;

    /// Removes an edge from the graph, renumbering the remaining edges
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
