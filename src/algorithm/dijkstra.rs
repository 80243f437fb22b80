use std::fmt::Debug;
use std::marker::PhantomData;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::heuristic::{Heuristic, ZeroHeuristic};
use crate::algorithm::traits::{check_endpoints, reconstruct_path, PathFinder};
use crate::data_structures::PriorityQueue;
use crate::graph::{Graph, VertexColor};
use crate::Result;

/// Dijkstra's algorithm and A* as one routine
///
/// The frontier is any [`PriorityQueue`] implementation `Q`; the search only
/// uses the shared contract, so every queue variant yields the same path.
/// Vertices in the frontier are re-prioritized in place with
/// `change_priority` instead of being pushed twice.
#[derive(Debug)]
pub struct CostSearch<Q, H = ZeroHeuristic> {
    heuristic: H,
    use_heuristic: bool,
    _queue: PhantomData<fn() -> Q>,
}

impl<Q> CostSearch<Q, ZeroHeuristic> {
    /// Creates a plain Dijkstra search
    pub fn dijkstra() -> Self {
        CostSearch {
            heuristic: ZeroHeuristic,
            use_heuristic: false,
            _queue: PhantomData,
        }
    }
}

impl<Q> Default for CostSearch<Q, ZeroHeuristic> {
    fn default() -> Self {
        Self::dijkstra()
    }
}

impl<Q, H> CostSearch<Q, H> {
    /// Creates an A* search guided by `heuristic`
    pub fn a_star(heuristic: H) -> Self {
        CostSearch {
            heuristic,
            use_heuristic: true,
            _queue: PhantomData,
        }
    }

    /// Returns true if this search adds the heuristic to frontier priorities
    pub fn uses_heuristic(&self) -> bool {
        self.use_heuristic
    }

    fn estimate<W>(&self, from: usize, to: usize) -> W
    where
        W: Zero,
        H: Heuristic<W>,
    {
        if self.use_heuristic {
            self.heuristic.estimate(from, to)
        } else {
            W::zero()
        }
    }
}

impl<W, G, Q, H> PathFinder<W, G> for CostSearch<Q, H>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    Q: PriorityQueue<usize, W>,
    H: Heuristic<W>,
{
    fn name(&self) -> &'static str {
        if self.use_heuristic {
            "A*"
        } else {
            "Dijkstra"
        }
    }

    fn find_path(&self, graph: &mut G, start: usize, end: usize) -> Result<Vec<usize>> {
        graph.reset_data();
        check_endpoints::<W, G>(graph, start, end)?;

        {
            let state = graph.vertex_mut(start)?;
            state.cost = W::zero();
            state.color = VertexColor::Frontier;
        }
        let mut frontier = Q::default();
        frontier.enqueue(start, self.estimate(start, end))?;
        let mut settled = 0usize;

        while !frontier.is_empty() {
            let current = frontier.dequeue()?;
            let current_cost = {
                let state = graph.vertex_mut(current)?;
                state.visited = true;
                state.color = VertexColor::Finalized;
                state.cost
            };
            settled += 1;

            if current == end {
                let path = reconstruct_path::<W, G>(graph, end)?;
                debug!(
                    "{} reached {} from {} at cost {:?} after settling {} vertices",
                    <Self as PathFinder<W, G>>::name(self),
                    end,
                    start,
                    current_cost,
                    settled
                );
                return Ok(path);
            }

            let incident: Vec<(usize, W)> = graph.incident_edges(current).collect();
            for (neighbor, edge_cost) in incident {
                let state = graph.vertex_mut(neighbor)?;
                if state.visited {
                    continue;
                }

                let cost = current_cost + edge_cost;
                if cost < state.cost {
                    let in_frontier = state.color == VertexColor::Frontier;
                    state.cost = cost;
                    state.previous = Some(current);
                    state.color = VertexColor::Frontier;

                    let estimate: W = self.estimate(neighbor, end);
                    let priority = cost + estimate;
                    trace!("relax {} -> {}: cost {:?}, priority {:?}", current, neighbor, cost, priority);
                    if in_frontier {
                        frontier.change_priority(&neighbor, priority)?;
                    } else {
                        frontier.enqueue(neighbor, priority)?;
                    }
                }
            }
        }

        debug!(
            "{} found no path from {} to {} after settling {} vertices",
            <Self as PathFinder<W, G>>::name(self),
            start,
            end,
            settled
        );
        Ok(Vec::new())
    }
}
