use std::collections::VecDeque;
use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::traits::{check_endpoints, reconstruct_path, PathFinder};
use crate::graph::{Graph, VertexColor};
use crate::Result;

/// Breadth-first search returning a path with the fewest edges
///
/// Edge costs are ignored: on a weighted graph the result minimizes hop
/// count, not total cost.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    /// Creates a new breadth-first search instance
    pub fn new() -> Self {
        BreadthFirstSearch
    }
}

impl<W, G> PathFinder<W, G> for BreadthFirstSearch
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn find_path(&self, graph: &mut G, start: usize, end: usize) -> Result<Vec<usize>> {
        graph.reset_data();
        check_endpoints::<W, G>(graph, start, end)?;

        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        {
            let state = graph.vertex_mut(start)?;
            state.visited = true;
            state.color = VertexColor::Frontier;
        }

        while let Some(vertex) = frontier.pop_front() {
            graph.vertex_mut(vertex)?.color = VertexColor::Finalized;
            if vertex == end {
                let path = reconstruct_path::<W, G>(graph, end)?;
                debug!("BFS reached {} from {} in {} hops", end, start, path.len() - 1);
                return Ok(path);
            }

            let neighbors: Vec<usize> = graph.neighbors(vertex).collect();
            for neighbor in neighbors {
                let state = graph.vertex_mut(neighbor)?;
                // Marked at enqueue time so each vertex enters the frontier once
                if !state.visited {
                    state.visited = true;
                    state.color = VertexColor::Frontier;
                    state.previous = Some(vertex);
                    frontier.push_back(neighbor);
                }
            }
        }

        debug!("BFS found no path from {} to {}", start, end);
        Ok(Vec::new())
    }
}
