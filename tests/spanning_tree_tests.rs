use std::collections::BTreeSet;

use ordered_float::OrderedFloat;
use trailblazer::data_structures::{
    BinaryHeapQueue, BucketQueue, DisjointSet, LinkedQueue, PriorityQueue, SortedArrayQueue,
    UnsortedArrayQueue,
};
use trailblazer::graph::generators::{grid_graph, GridConfig};
use trailblazer::graph::{Graph, MutableGraph, UndirectedGraph, VertexColor};
use trailblazer::{
    Error, Kruskal, KruskalClusters, PrimQueue, PrimScan, SpanningTree, SpanningTreeAlgorithm,
};

type Cost = OrderedFloat<f64>;
type Maze = UndirectedGraph<Cost>;

fn tree<A: SpanningTreeAlgorithm<Cost, Maze>>(
    algorithm: &A,
    graph: &mut Maze,
) -> trailblazer::Result<SpanningTree<Cost>> {
    algorithm.spanning_tree(graph)
}

// A=0, B=1, C=2, D=3 with AB=1, BC=2, CD=3, AD=4, AC=5
fn square_with_diagonal() -> Maze {
    let mut graph = Maze::with_capacity(4);
    for (from, to, cost) in [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (0, 3, 4.0), (0, 2, 5.0)] {
        graph.add_edge(from, to, OrderedFloat(cost)).unwrap();
    }
    graph
}

fn two_islands() -> Maze {
    let mut graph = Maze::with_capacity(4);
    graph.add_edge(0, 1, OrderedFloat(1.0)).unwrap();
    graph.add_edge(2, 3, OrderedFloat(2.0)).unwrap();
    graph
}

// Asserts the tree spans the graph without cycles and its cost adds up
fn assert_spanning(graph: &Maze, tree: &SpanningTree<Cost>) {
    assert_eq!(tree.len(), graph.vertex_count() - 1);
    assert_eq!(tree.edge_set().len(), tree.len(), "an edge was picked twice");
    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut total = OrderedFloat(0.0);
    for id in tree.edge_set() {
        let edge = graph.edge(id).unwrap();
        assert!(sets.union(edge.start, edge.finish), "edge {} closes a cycle", id);
        total = total + edge.cost;
    }
    assert_eq!(sets.component_count(), 1);
    assert_eq!(total, tree.total_cost);
}

fn check_all_variants_on_square<Q: PriorityQueue<usize, Cost>>() {
    let mut graph = square_with_diagonal();
    let expected: BTreeSet<usize> = [0, 1, 2].into_iter().collect();

    for result in [
        tree(&Kruskal::<Q>::new(), &mut graph),
        tree(&KruskalClusters::<Q>::new(), &mut graph),
        tree(&PrimQueue::<Q>::new(), &mut graph),
    ] {
        let result = result.unwrap();
        assert_eq!(result.total_cost, OrderedFloat(6.0));
        assert_eq!(result.edge_set(), expected);
    }
}

#[test]
fn test_square_minimum_spanning_tree() {
    let mut graph = square_with_diagonal();
    let scan = tree(&PrimScan::new(), &mut graph).unwrap();
    assert_eq!(scan.edges, vec![0, 1, 2]);
    assert_eq!(scan.total_cost, OrderedFloat(6.0));
    assert_spanning(&graph, &scan);

    check_all_variants_on_square::<UnsortedArrayQueue<usize, Cost>>();
    check_all_variants_on_square::<SortedArrayQueue<usize, Cost>>();
    check_all_variants_on_square::<BucketQueue<usize, Cost>>();
    check_all_variants_on_square::<LinkedQueue<usize, Cost>>();
    check_all_variants_on_square::<BinaryHeapQueue<usize, Cost>>();
}

#[test]
fn test_prim_root_does_not_change_cost() {
    let mut graph = square_with_diagonal();
    for root in 0..4 {
        let scan = tree(&PrimScan::new().with_root(root), &mut graph).unwrap();
        let queued = tree(
            &PrimQueue::<BinaryHeapQueue<usize, Cost>>::new().with_root(root),
            &mut graph,
        )
        .unwrap();
        assert_eq!(scan.total_cost, OrderedFloat(6.0));
        assert_eq!(queued.total_cost, OrderedFloat(6.0));
    }
}

#[test]
fn test_prim_rejects_invalid_root() {
    let mut graph = square_with_diagonal();
    assert_eq!(
        tree(&PrimScan::new().with_root(9), &mut graph),
        Err(Error::InvalidVertex(9))
    );
}

#[test]
fn test_prim_rejects_invalid_root_on_empty_graph() {
    let mut empty = Maze::new();
    assert_eq!(
        tree(&PrimScan::new().with_root(5), &mut empty),
        Err(Error::InvalidVertex(5))
    );
    assert_eq!(
        tree(
            &PrimQueue::<BucketQueue<usize, Cost>>::new().with_root(5),
            &mut empty
        ),
        Err(Error::InvalidVertex(5))
    );
}

#[test]
fn test_total_cost_does_not_depend_on_pick_order() {
    // Prim from 0 picks 0.3, 0.2, 0.1 while Kruskal picks 0.1, 0.2, 0.3;
    // summed in those orders the floating point totals differ
    let mut graph = Maze::with_capacity(4);
    graph.add_edge(0, 1, OrderedFloat(0.3)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(0.2)).unwrap();
    graph.add_edge(2, 3, OrderedFloat(0.1)).unwrap();

    let prim = tree(&PrimScan::new(), &mut graph).unwrap();
    let kruskal = tree(&Kruskal::<BinaryHeapQueue<usize, Cost>>::new(), &mut graph).unwrap();
    assert_eq!(prim.edges, vec![0, 1, 2]);
    assert_eq!(kruskal.edges, vec![2, 1, 0]);
    assert_eq!(prim.total_cost, kruskal.total_cost);
    assert_eq!(prim.total_cost, OrderedFloat(0.3 + 0.2 + 0.1));
}

#[test]
fn test_prim_fails_on_disconnected_graph() {
    let mut graph = two_islands();
    let expected = Err(Error::NoSpanningTree {
        reached: 2,
        total: 4,
    });
    assert_eq!(tree(&PrimScan::new(), &mut graph), expected);
    assert_eq!(
        tree(&PrimQueue::<LinkedQueue<usize, Cost>>::new(), &mut graph),
        expected
    );
}

#[test]
fn test_kruskal_builds_forest_on_disconnected_graph() {
    let mut graph = two_islands();
    let forest = tree(&Kruskal::<BucketQueue<usize, Cost>>::new(), &mut graph).unwrap();
    assert_eq!(forest.edges, vec![0, 1]);
    assert_eq!(forest.total_cost, OrderedFloat(3.0));

    let clusters = tree(&KruskalClusters::<BucketQueue<usize, Cost>>::new(), &mut graph).unwrap();
    assert_eq!(clusters, forest);
}

#[test]
fn test_trivial_graphs() {
    let mut empty = Maze::new();
    assert!(tree(&PrimScan::new(), &mut empty).unwrap().is_empty());
    assert!(tree(&Kruskal::<BinaryHeapQueue<usize, Cost>>::new(), &mut empty)
        .unwrap()
        .is_empty());

    let mut single = Maze::with_capacity(1);
    assert!(tree(&PrimQueue::<SortedArrayQueue<usize, Cost>>::new(), &mut single)
        .unwrap()
        .is_empty());
    assert!(tree(&KruskalClusters::<SortedArrayQueue<usize, Cost>>::new(), &mut single)
        .unwrap()
        .is_empty());
}

#[test]
fn test_prim_waits_for_edges_between_outside_vertices() {
    // The cheapest edge (2 - 3) is not reachable from the root until 1 - 2 is taken
    let mut graph = Maze::with_capacity(4);
    graph.add_edge(0, 1, OrderedFloat(5.0)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(6.0)).unwrap();
    graph.add_edge(2, 3, OrderedFloat(1.0)).unwrap();
    graph.add_edge(0, 3, OrderedFloat(9.0)).unwrap();

    let result = tree(&PrimQueue::<BinaryHeapQueue<usize, Cost>>::new(), &mut graph).unwrap();
    assert_eq!(result.edges, vec![0, 1, 2]);
    assert_eq!(result.total_cost, OrderedFloat(12.0));
    assert_spanning(&graph, &result);
}

#[test]
fn test_prim_marks_tree_vertices() {
    let mut graph = square_with_diagonal();
    tree(&PrimQueue::<BucketQueue<usize, Cost>>::new(), &mut graph).unwrap();
    for vertex in graph.vertices() {
        let state = graph.vertex(vertex).unwrap();
        assert!(state.visited);
        assert_eq!(state.color, VertexColor::Finalized);
    }
}

fn maze_trees<Q: PriorityQueue<usize, Cost>>(graph: &mut Maze) -> [SpanningTree<Cost>; 3] {
    [
        tree(&Kruskal::<Q>::new(), graph).unwrap(),
        tree(&KruskalClusters::<Q>::new(), graph).unwrap(),
        tree(&PrimQueue::<Q>::new(), graph).unwrap(),
    ]
}

#[test]
fn test_random_mazes_agree_across_algorithms_and_queues() {
    for seed in 0..5 {
        let config = GridConfig::new(8, 11)
            .with_random_weights(1.0, 10.0)
            .with_seed(seed);
        let mut graph = grid_graph(&config).unwrap();

        let reference = tree(&PrimScan::new(), &mut graph).unwrap();
        assert_spanning(&graph, &reference);

        let mut results = Vec::new();
        results.extend(maze_trees::<UnsortedArrayQueue<usize, Cost>>(&mut graph));
        results.extend(maze_trees::<SortedArrayQueue<usize, Cost>>(&mut graph));
        results.extend(maze_trees::<BucketQueue<usize, Cost>>(&mut graph));
        results.extend(maze_trees::<LinkedQueue<usize, Cost>>(&mut graph));
        results.extend(maze_trees::<BinaryHeapQueue<usize, Cost>>(&mut graph));

        for result in &results {
            assert_spanning(&graph, result);
            assert_eq!(result.edge_set(), reference.edge_set(), "seed {}", seed);
            assert_eq!(result.total_cost, reference.total_cost);
        }
    }
}

#[test]
fn test_algorithm_names() {
    assert_eq!(SpanningTreeAlgorithm::<Cost, Maze>::name(&PrimScan::new()), "Prim (scan)");
    assert_eq!(
        SpanningTreeAlgorithm::<Cost, Maze>::name(&PrimQueue::<BinaryHeapQueue<usize, Cost>>::new()),
        "Prim (queue)"
    );
    assert_eq!(
        SpanningTreeAlgorithm::<Cost, Maze>::name(&Kruskal::<BinaryHeapQueue<usize, Cost>>::new()),
        "Kruskal"
    );
}
