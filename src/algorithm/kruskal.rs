use std::collections::BTreeSet;
use std::fmt::Debug;
use std::marker::PhantomData;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::traits::{SpanningTree, SpanningTreeAlgorithm};
use crate::data_structures::{DisjointSet, PriorityQueue};
use crate::graph::Graph;
use crate::Result;

/// Loads every edge into a fresh queue keyed by edge id, prioritized by cost
fn edge_stream<W, G, Q>(graph: &G) -> Result<Q>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    Q: PriorityQueue<usize, W>,
{
    let mut queue = Q::default();
    for (id, edge) in graph.edges().iter().enumerate() {
        queue.enqueue(id, edge.cost)?;
    }
    Ok(queue)
}

/// Kruskal's algorithm over a disjoint-set forest
///
/// Edges are drained from the queue cheapest first; an edge is kept when its
/// endpoints lie in different components. On a disconnected graph the result
/// is a minimum spanning forest.
#[derive(Debug)]
pub struct Kruskal<Q> {
    _queue: PhantomData<fn() -> Q>,
}

impl<Q> Kruskal<Q> {
    /// Creates a new Kruskal instance
    pub fn new() -> Self {
        Kruskal {
            _queue: PhantomData,
        }
    }
}

impl<Q> Default for Kruskal<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G, Q> SpanningTreeAlgorithm<W, G> for Kruskal<Q>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    Q: PriorityQueue<usize, W>,
{
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn spanning_tree(&self, graph: &mut G) -> Result<SpanningTree<W>> {
        graph.reset_data();
        let n = graph.vertex_count();
        let mut queue: Q = edge_stream::<W, G, Q>(graph)?;
        let mut sets = DisjointSet::new(n);
        let mut tree = SpanningTree::new();

        while !queue.is_empty() && sets.component_count() > 1 {
            let (id, cost) = queue.dequeue_entry()?.into_parts();
            let edge = graph.edges()[id];
            if sets.union(edge.start, edge.finish) {
                trace!("Kruskal keeps edge {} ({} - {})", id, edge.start, edge.finish);
                tree.push(id, cost);
            }
        }

        tree.settle(&*graph);
        debug!(
            "Kruskal selected {} edges, total cost {:?}, {} components",
            tree.len(),
            tree.total_cost,
            sets.component_count()
        );
        Ok(tree)
    }
}

/// Kruskal's algorithm tracking components as explicit vertex sets
///
/// Finding an endpoint's component scans every cluster, so each step costs
/// O(n). Produces the same tree as [`Kruskal`].
#[derive(Debug)]
pub struct KruskalClusters<Q> {
    _queue: PhantomData<fn() -> Q>,
}

impl<Q> KruskalClusters<Q> {
    /// Creates a new cluster-scan Kruskal instance
    pub fn new() -> Self {
        KruskalClusters {
            _queue: PhantomData,
        }
    }
}

impl<Q> Default for KruskalClusters<Q> {
    fn default() -> Self {
        Self::new()
    }
}

/// Merges the clusters holding `a` and `b`; returns false if they already share one
fn join_clusters(clusters: &mut Vec<BTreeSet<usize>>, a: usize, b: usize) -> bool {
    let first = clusters.iter().position(|cluster| cluster.contains(&a));
    let second = clusters.iter().position(|cluster| cluster.contains(&b));
    match (first, second) {
        (Some(first), Some(second)) if first != second => {
            let (keep, drop) = (first.min(second), first.max(second));
            let mut moved = clusters.swap_remove(drop);
            clusters[keep].append(&mut moved);
            true
        }
        _ => false,
    }
}

impl<W, G, Q> SpanningTreeAlgorithm<W, G> for KruskalClusters<Q>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    Q: PriorityQueue<usize, W>,
{
    fn name(&self) -> &'static str {
        "Kruskal (clusters)"
    }

    fn spanning_tree(&self, graph: &mut G) -> Result<SpanningTree<W>> {
        graph.reset_data();
        let mut queue: Q = edge_stream::<W, G, Q>(graph)?;
        let mut clusters: Vec<BTreeSet<usize>> =
            graph.vertices().map(|v| BTreeSet::from([v])).collect();
        let mut tree = SpanningTree::new();

        while !queue.is_empty() && clusters.len() > 1 {
            let (id, cost) = queue.dequeue_entry()?.into_parts();
            let edge = graph.edges()[id];
            if join_clusters(&mut clusters, edge.start, edge.finish) {
                tree.push(id, cost);
            }
        }

        tree.settle(&*graph);
        debug!(
            "Kruskal (clusters) selected {} edges, total cost {:?}, {} clusters",
            tree.len(),
            tree.total_cost,
            clusters.len()
        );
        Ok(tree)
    }
}
