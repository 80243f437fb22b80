pub mod directed;
pub mod generators;
pub mod traits;
pub mod undirected;
pub mod vertex;

pub use directed::DirectedGraph;
pub use traits::{Graph, MutableGraph};
pub use undirected::UndirectedGraph;
pub use vertex::{Edge, VertexColor, VertexState};
