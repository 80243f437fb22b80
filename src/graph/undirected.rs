use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Edge, VertexState};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// An undirected graph implementation using adjacency lists
///
/// Each edge is stored once and listed in the adjacency of both endpoints, so
/// `edges()` yields every connection exactly once (as spanning-tree algorithms
/// expect) while `incident_edges` walks it from either side.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// All edges; an edge's id is its index
    edges: Vec<Edge<W>>,

    /// Incident edges for each vertex: vertex_id -> [(other_endpoint, edge_id)]
    adjacency: Vec<Vec<(usize, usize)>>,

    /// Traversal state for each vertex
    states: Vec<VertexState<W>>,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            edges: Vec::new(),
            adjacency: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Creates a new undirected graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertices],
            states: vec![VertexState::new(); vertices],
        }
    }

    fn link(&mut self, id: usize) {
        let Edge { start, finish, .. } = self.edges[id];
        self.adjacency[start].push((finish, id));
        if start != finish {
            self.adjacency[finish].push((start, id));
        }
    }

    fn reindex(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
        for id in 0..self.edges.len() {
            self.link(id);
        }
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.states.len()
    }

    fn incident_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(list) => Box::new(
                list.iter()
                    .map(move |&(neighbor, id)| (neighbor, self.edges[id].cost)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn find_edge(&self, from: usize, to: usize) -> Option<&Edge<W>> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(neighbor, _)| *neighbor == to)
            .map(|&(_, id)| &self.edges[id])
    }

    fn vertex(&self, vertex: usize) -> Result<&VertexState<W>> {
        self.states.get(vertex).ok_or(Error::InvalidVertex(vertex))
    }

    fn vertex_mut(&mut self, vertex: usize) -> Result<&mut VertexState<W>> {
        self.states.get_mut(vertex).ok_or(Error::InvalidVertex(vertex))
    }

    fn reset_data(&mut self) {
        for state in &mut self.states {
            state.reset();
        }
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.states.len();
        self.adjacency.push(Vec::new());
        self.states.push(VertexState::new());
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<usize> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        if let Some(&(_, id)) = self.adjacency[from].iter().find(|(neighbor, _)| *neighbor == to) {
            self.edges[id].cost = weight;
            return Ok(id);
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.link(id);
        Ok(id)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let len_before = self.edges.len();
        self.edges.retain(|edge| edge.other(from) != Some(to));
        let removed = len_before > self.edges.len();
        if removed {
            self.reindex();
        }
        removed
    }
}
