pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;
pub mod heuristic;
pub mod kruskal;
pub mod prim;
pub mod traits;

pub use heuristic::{Heuristic, ManhattanHeuristic, ZeroHeuristic};
pub use traits::{PathFinder, SpanningTree, SpanningTreeAlgorithm};
