//! Trailblazer - interchangeable priority queues and the graph algorithms they drive
//!
//! This library provides five priority queue representations behind one contract
//! (unsorted array, sorted array, bucket map, doubly linked list and binary heap),
//! and the path-finding (DFS, BFS, Dijkstra, A*) and minimum spanning tree
//! (Kruskal, Prim) algorithms that schedule their work through any of them.
//!
//! All queue variants agree on ordering: lower priority first, ties broken by
//! ascending value. Algorithms built on top of them are therefore deterministic
//! regardless of which variant is plugged in.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    breadth_first::BreadthFirstSearch, depth_first::DepthFirstSearch, dijkstra::CostSearch,
    kruskal::{Kruskal, KruskalClusters},
    prim::{PrimQueue, PrimScan},
    PathFinder, SpanningTree, SpanningTreeAlgorithm,
};
pub use data_structures::{
    BinaryHeapQueue, BucketQueue, LinkedQueue, PriorityEntry, PriorityQueue, SortedArrayQueue,
    UnsortedArrayQueue,
};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, undirected::UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("value {0} is not found in this priority queue")]
    NotFound(String),

    #[error("new priority {requested} cannot be greater than old priority {current}")]
    InvalidPriority { current: String, requested: String },

    #[error("value {0} is already present in this priority queue")]
    DuplicateKey(String),

    #[error("no possible maze: spanning tree reached {reached} of {total} vertices")]
    NoSpanningTree { reached: usize, total: usize },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
