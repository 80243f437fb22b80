use crate::graph::{Graph, MutableGraph, UndirectedGraph};
use crate::Result;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::fmt::Debug;

/// Parameters for grid graph generation
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Edge weights are drawn uniformly from this range; `None` gives unit weights
    pub weight_range: Option<(f64, f64)>,
    /// Seed for the weight generator
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            weight_range: None,
            seed: 106,
        }
    }
}

impl GridConfig {
    /// Creates a unit-weight grid configuration
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Draw random weights from `min..max`, as used for maze generation
    pub fn with_random_weights(mut self, min: f64, max: f64) -> Self {
        self.weight_range = Some((min, max));
        self
    }

    /// Set the seed for the weight generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Vertex id of the cell at `(row, col)`
    pub fn vertex_at(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// Generates a 4-connected grid graph with `rows * cols` vertices
///
/// Vertex `(r, c)` has id `r * cols + c`. With random weights, a minimum
/// spanning tree of this graph is a random maze.
pub fn grid_graph(config: &GridConfig) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::with_capacity(config.rows * config.cols);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut weight = || match config.weight_range {
        Some((min, max)) if min < max => OrderedFloat(rng.gen_range(min..max)),
        Some((min, _)) => OrderedFloat(min),
        None => OrderedFloat(1.0),
    };

    for r in 0..config.rows {
        for c in 0..config.cols {
            let current = config.vertex_at(r, c);
            if c + 1 < config.cols {
                graph.add_edge(current, config.vertex_at(r, c + 1), weight())?;
            }
            if r + 1 < config.rows {
                graph.add_edge(current, config.vertex_at(r + 1, c), weight())?;
            }
        }
    }

    Ok(graph)
}

/// Generates a cycle `0 - 1 - ... - (n-1) - 0` with every edge costing `cost`
pub fn cycle_graph<W>(n: usize, cost: W) -> Result<UndirectedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
{
    let mut graph = UndirectedGraph::with_capacity(n);
    if n < 2 {
        return Ok(graph);
    }
    // For n == 2 the closing edge coincides with the first one.
    for v in 0..n {
        graph.add_edge(v, (v + 1) % n, cost)?;
    }
    Ok(graph)
}

/// Sums the edge costs along a vertex path
///
/// Returns `None` if two consecutive vertices are not joined by an edge. An
/// empty or single-vertex path costs zero.
pub fn path_cost<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    path.windows(2).try_fold(W::zero(), |total, pair| {
        graph
            .get_edge_weight(pair[0], pair[1])
            .map(|cost| total + cost)
    })
}
