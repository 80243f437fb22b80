use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::traits::{check_endpoints, PathFinder};
use crate::graph::{Graph, VertexColor};
use crate::Result;

/// Depth-first search returning the first path found (not necessarily shortest)
///
/// Backtracking uses an explicit stack, so search depth is bounded by the
/// vertex count rather than the call stack. A vertex abandoned as a dead end
/// keeps its visited flag and is colored [`VertexColor::DeadEnd`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Creates a new depth-first search instance
    pub fn new() -> Self {
        DepthFirstSearch
    }
}

fn enter<W, G>(graph: &mut G, vertex: usize) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let state = graph.vertex_mut(vertex)?;
    state.visited = true;
    state.color = VertexColor::Finalized;
    Ok(())
}

impl<W, G> PathFinder<W, G> for DepthFirstSearch
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn find_path(&self, graph: &mut G, start: usize, end: usize) -> Result<Vec<usize>> {
        graph.reset_data();
        check_endpoints::<W, G>(graph, start, end)?;

        let mut path = vec![start];
        enter::<W, G>(graph, start)?;
        if start == end {
            return Ok(path);
        }

        // Each frame: (vertex, its neighbors, index of the next neighbor to try)
        let mut stack = vec![(start, graph.neighbors(start).collect::<Vec<_>>(), 0usize)];

        while let Some((vertex, neighbors, cursor)) = stack.last_mut() {
            let vertex = *vertex;
            let next = neighbors.get(*cursor).copied();
            *cursor += 1;

            match next {
                Some(neighbor) => {
                    if graph.vertex(neighbor)?.visited {
                        continue;
                    }
                    enter::<W, G>(graph, neighbor)?;
                    path.push(neighbor);
                    if neighbor == end {
                        debug!("DFS reached {} from {} in {} steps", end, start, path.len() - 1);
                        return Ok(path);
                    }
                    let neighbors = graph.neighbors(neighbor).collect();
                    stack.push((neighbor, neighbors, 0));
                }
                None => {
                    graph.vertex_mut(vertex)?.color = VertexColor::DeadEnd;
                    path.pop();
                    stack.pop();
                }
            }
        }

        debug!("DFS found no path from {} to {}", start, end);
        Ok(path)
    }
}
