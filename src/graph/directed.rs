use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Edge, VertexState};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// All edges; an edge's id is its index
    edges: Vec<Edge<W>>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, edge_id)]
    outgoing_edges: Vec<Vec<(usize, usize)>>,

    /// Traversal state for each vertex
    states: Vec<VertexState<W>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing_edges: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing_edges: vec![Vec::new(); vertices],
            states: vec![VertexState::new(); vertices],
        }
    }

    /// Rebuilds the adjacency lists from the edge list
    fn reindex(&mut self) {
        for list in &mut self.outgoing_edges {
            list.clear();
        }
        for (id, edge) in self.edges.iter().enumerate() {
            self.outgoing_edges[edge.start].push((edge.finish, id));
        }
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.states.len()
    }

    fn incident_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(list) => Box::new(
                list.iter()
                    .map(move |&(target, id)| (target, self.edges[id].cost)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn find_edge(&self, from: usize, to: usize) -> Option<&Edge<W>> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
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

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.states.len();
        self.outgoing_edges.push(Vec::new());
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

        // Check if edge already exists and update it if it does
        if let Some(&(_, id)) = self.outgoing_edges[from].iter().find(|(target, _)| *target == to) {
            self.edges[id].cost = weight;
            return Ok(id);
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.outgoing_edges[from].push((to, id));
        Ok(id)
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let len_before = self.edges.len();
        self.edges
            .retain(|edge| !(edge.start == from && edge.finish == to));
        let removed = len_before > self.edges.len();
        if removed {
            self.reindex();
        }
        removed
    }
}
