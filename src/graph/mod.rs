//! Graph store and the classical algorithms that walk it.
//!
//! - `adjacency_map`: dynamic directed/undirected graph with per-vertex adjacency maps
//! - `handles`: `VertexKey` / `EdgeKey` tokens minted by a graph
//! - `algorithms`: traversals, topological sort, Dijkstra, Kruskal, transitive closure

pub mod adjacency_map;
pub mod algorithms;
pub mod handles;
pub mod stats;

pub use adjacency_map::AdjacencyMapGraph;
pub use handles::{EdgeKey, VertexKey};
pub use stats::GraphStatistics;
