//! Algorithms over [`AdjacencyMapGraph`](super::AdjacencyMapGraph).
//!
//! None of these mutate the graph except [`transitive_closure`], which inserts
//! the missing reachability edges in place.

use indexmap::{IndexMap, IndexSet};

use super::handles::{EdgeKey, VertexKey};

pub mod closure;
pub mod shortest_path;
pub mod spanning_tree;
pub mod topological;
pub mod traversal;

pub use closure::transitive_closure;
pub use shortest_path::{shortest_path_lengths, shortest_path_tree};
pub use spanning_tree::minimum_spanning_tree;
pub use topological::{is_acyclic, topological_sort};
pub use traversal::{bfs, bfs_complete, construct_path, dfs, dfs_complete};

/// Discovery forest: each non-root vertex maps to the edge that first reached it.
///
/// Iteration order is discovery order.
pub type Forest = IndexMap<VertexKey, EdgeKey>;

/// Vertices already discovered by a traversal, in discovery order.
pub type KnownSet = IndexSet<VertexKey>;

/// Settled shortest-path distances, in settle order.
pub type Distances<W> = IndexMap<VertexKey, W>;
