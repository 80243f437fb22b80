use std::fmt::Debug;
use std::marker::PhantomData;

use log::{debug, trace, warn};
use num_traits::{Float, Zero};

use crate::algorithm::traits::{SpanningTree, SpanningTreeAlgorithm};
use crate::data_structures::PriorityQueue;
use crate::graph::{Edge, Graph, VertexColor};
use crate::{Error, Result};

/// Marks a vertex as part of the growing tree
fn join_tree<W, G>(graph: &mut G, vertex: usize) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let state = graph.vertex_mut(vertex)?;
    state.visited = true;
    state.color = VertexColor::Finalized;
    Ok(())
}

/// Resolves the root vertex and seeds the tree with it.
///
/// An explicit root must exist even when the graph is empty. Returns `None`
/// for an empty graph without one.
fn seed_tree<W, G>(graph: &mut G, root: Option<usize>) -> Result<Option<usize>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if let Some(root) = root {
        if !graph.has_vertex(root) {
            return Err(Error::InvalidVertex(root));
        }
    }
    if graph.vertex_count() == 0 {
        return Ok(None);
    }
    let root = root.unwrap_or(0);
    join_tree::<W, G>(graph, root)?;
    Ok(Some(root))
}

/// For an edge with exactly one endpoint in the tree, returns the outside endpoint
fn crossing<W, G>(graph: &G, edge: &Edge<W>) -> Result<Crossing>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let start_in = graph.vertex(edge.start)?.visited;
    let finish_in = graph.vertex(edge.finish)?.visited;
    Ok(match (start_in, finish_in) {
        (true, false) => Crossing::Leaves(edge.finish),
        (false, true) => Crossing::Leaves(edge.start),
        (true, true) => Crossing::Inside,
        (false, false) => Crossing::Outside,
    })
}

/// Where an edge lies relative to the growing tree
enum Crossing {
    /// Exactly one endpoint is in the tree; holds the other one
    Leaves(usize),
    Inside,
    Outside,
}

fn no_spanning_tree(reached: usize, total: usize) -> Error {
    warn!("no spanning tree: reached {} of {} vertices", reached, total);
    Error::NoSpanningTree { reached, total }
}

/// Prim's algorithm scanning all remaining edges on every step
///
/// Each step picks the cheapest edge with exactly one endpoint in the tree
/// (ties go to the lower edge id). Costs O(n * m).
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimScan {
    root: Option<usize>,
}

impl PrimScan {
    /// Creates a new instance growing the tree from vertex 0
    pub fn new() -> Self {
        PrimScan { root: None }
    }

    /// Set the vertex the tree grows from
    pub fn with_root(mut self, root: usize) -> Self {
        self.root = Some(root);
        self
    }
}

impl<W, G> SpanningTreeAlgorithm<W, G> for PrimScan
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Prim (scan)"
    }

    fn spanning_tree(&self, graph: &mut G) -> Result<SpanningTree<W>> {
        graph.reset_data();
        let mut tree = SpanningTree::new();
        if seed_tree::<W, G>(graph, self.root)?.is_none() {
            return Ok(tree);
        }

        let total = graph.vertex_count();
        let mut reached = 1;
        let mut remaining: Vec<usize> = (0..graph.edge_count()).collect();

        while reached < total {
            let mut best: Option<(usize, W, usize)> = None;
            for (position, &id) in remaining.iter().enumerate() {
                let edge = &graph.edges()[id];
                if let Crossing::Leaves(outside) = crossing(&*graph, edge)? {
                    if best.map_or(true, |(_, cost, _)| edge.cost < cost) {
                        best = Some((position, edge.cost, outside));
                    }
                }
            }

            let (position, cost, outside) = best.ok_or_else(|| no_spanning_tree(reached, total))?;
            let id = remaining.remove(position);
            trace!("Prim (scan) adds edge {} reaching vertex {}", id, outside);
            join_tree::<W, G>(graph, outside)?;
            tree.push(id, cost);
            reached += 1;
        }

        tree.settle(&*graph);
        debug!(
            "Prim (scan) selected {} edges, total cost {:?}",
            tree.len(),
            tree.total_cost
        );
        Ok(tree)
    }
}

/// Prim's algorithm driven by a priority queue of all edges
///
/// Edges are dequeued cheapest first. An edge leaving the tree is kept; an
/// edge inside the tree is dropped; an edge with both endpoints outside is
/// set aside and re-queued once the tree grows, since it may become a
/// crossing edge later.
#[derive(Debug)]
pub struct PrimQueue<Q> {
    root: Option<usize>,
    _queue: PhantomData<fn() -> Q>,
}

impl<Q> PrimQueue<Q> {
    /// Creates a new instance growing the tree from vertex 0
    pub fn new() -> Self {
        PrimQueue {
            root: None,
            _queue: PhantomData,
        }
    }

    /// Set the vertex the tree grows from
    pub fn with_root(mut self, root: usize) -> Self {
        self.root = Some(root);
        self
    }
}

impl<Q> Default for PrimQueue<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G, Q> SpanningTreeAlgorithm<W, G> for PrimQueue<Q>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    Q: PriorityQueue<usize, W>,
{
    fn name(&self) -> &'static str {
        "Prim (queue)"
    }

    fn spanning_tree(&self, graph: &mut G) -> Result<SpanningTree<W>> {
        graph.reset_data();
        let mut tree = SpanningTree::new();
        if seed_tree::<W, G>(graph, self.root)?.is_none() {
            return Ok(tree);
        }

        let mut queue = Q::default();
        for (id, edge) in graph.edges().iter().enumerate() {
            queue.enqueue(id, edge.cost)?;
        }

        let total = graph.vertex_count();
        let mut reached = 1;
        let mut deferred: Vec<(usize, W)> = Vec::new();

        while reached < total {
            if queue.is_empty() {
                return Err(no_spanning_tree(reached, total));
            }
            let (id, cost) = queue.dequeue_entry()?.into_parts();
            let edge = graph.edges()[id];

            match crossing(&*graph, &edge)? {
                Crossing::Leaves(outside) => {
                    trace!("Prim (queue) adds edge {} reaching vertex {}", id, outside);
                    join_tree::<W, G>(graph, outside)?;
                    tree.push(id, cost);
                    reached += 1;
                    for (id, cost) in deferred.drain(..) {
                        queue.enqueue(id, cost)?;
                    }
                }
                Crossing::Outside => deferred.push((id, cost)),
                Crossing::Inside => {}
            }
        }

        tree.settle(&*graph);
        debug!(
            "Prim (queue) selected {} edges, total cost {:?}",
            tree.len(),
            tree.total_cost
        );
        Ok(tree)
    }
}
