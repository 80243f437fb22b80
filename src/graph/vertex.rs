use num_traits::Float;
use std::fmt::Debug;

/// Traversal state tag of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexColor {
    /// Not yet reached by the current run
    #[default]
    Undiscovered,
    /// Discovered and waiting in a frontier queue
    Frontier,
    /// Dequeued / entered; its cost is final for this run
    Finalized,
    /// Entered by depth-first search and abandoned as a dead end
    DeadEnd,
}

/// Mutable per-vertex data touched by the traversal algorithms
///
/// `previous` is a plain vertex id used only to reconstruct paths; it carries
/// no ownership.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexState<W> {
    /// Shortest known cost from the start vertex
    pub cost: W,
    /// Predecessor on the best known path
    pub previous: Option<usize>,
    pub visited: bool,
    pub color: VertexColor,
}

impl<W: Float> VertexState<W> {
    /// Creates the initial state: infinite cost, no predecessor, unvisited
    pub fn new() -> Self {
        VertexState {
            cost: W::infinity(),
            previous: None,
            visited: false,
            color: VertexColor::Undiscovered,
        }
    }

    /// Restores the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<W: Float> Default for VertexState<W> {
    fn default() -> Self {
        Self::new()
    }
}

/// An edge between two vertices with a fixed cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub start: usize,
    pub finish: usize,
    pub cost: W,
}

impl<W: Copy + Debug> Edge<W> {
    /// Creates a new edge
    pub fn new(start: usize, finish: usize, cost: W) -> Self {
        Edge {
            start,
            finish,
            cost,
        }
    }

    /// Returns the endpoint opposite to `vertex`, if `vertex` is an endpoint
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if self.start == vertex {
            Some(self.finish)
        } else if self.finish == vertex {
            Some(self.start)
        } else {
            None
        }
    }
}
