use num_traits::{Float, Zero};

/// Estimate of the remaining cost between two vertices
///
/// A* returns shortest paths only when the estimate is admissible, i.e. it
/// never exceeds the true remaining cost. This is not checked.
pub trait Heuristic<W> {
    fn estimate(&self, from: usize, to: usize) -> W;
}

/// Always estimates zero; A* with this heuristic is Dijkstra
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroHeuristic;

impl<W: Zero> Heuristic<W> for ZeroHeuristic {
    fn estimate(&self, _from: usize, _to: usize) -> W {
        W::zero()
    }
}

impl<W, F> Heuristic<W> for F
where
    F: Fn(usize, usize) -> W,
{
    fn estimate(&self, from: usize, to: usize) -> W {
        self(from, to)
    }
}

/// Manhattan distance on a row-major grid, scaled by the cheapest step cost
///
/// Admissible on 4-connected grids whose edges all cost at least `step_cost`.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanHeuristic {
    cols: usize,
    step_cost: f64,
}

impl ManhattanHeuristic {
    /// Creates a heuristic for a grid with `cols` columns and unit step cost
    pub fn new(cols: usize) -> Self {
        ManhattanHeuristic {
            cols: cols.max(1),
            step_cost: 1.0,
        }
    }

    /// Set the minimum cost of a single grid step
    pub fn with_step_cost(mut self, step_cost: f64) -> Self {
        self.step_cost = step_cost.max(0.0);
        self
    }

    fn cell(&self, vertex: usize) -> (usize, usize) {
        (vertex / self.cols, vertex % self.cols)
    }
}

impl<W: Float> Heuristic<W> for ManhattanHeuristic {
    fn estimate(&self, from: usize, to: usize) -> W {
        let (r1, c1) = self.cell(from);
        let (r2, c2) = self.cell(to);
        let steps = r1.abs_diff(r2) + c1.abs_diff(c2);
        W::from(steps as f64 * self.step_cost).unwrap_or_else(W::zero)
    }
}
