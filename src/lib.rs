//! # `cartograph` - Adjacency-Map Graph Engine
//!
//! A generic directed/undirected graph store plus the classical algorithms that
//! walk it, together with the two engines those algorithms lean on: a
//! union-find [`Partition`] and an [`AdaptablePriorityQueue`] with locators.
//!
//! ## Handle Safety
//!
//! Vertices, edges, queue entries and partition clusters are addressed by small
//! `Copy` handles. Every handle records which structure minted it and, where
//! entities can be removed, a generation. Presenting a handle to the wrong
//! structure, or one whose entity has been removed, yields an [`Error`] rather
//! than touching a reused slot.
//!
//! ## Key Features
//!
//! - **Graph store**: per-vertex adjacency maps, O(1) edge lookup, O(deg v)
//!   vertex removal, insertion-ordered iteration
//! - **Traversals**: iterative DFS and level-order BFS recording discovery
//!   forests, complete variants and path reconstruction
//! - **Ordering**: topological sort with explicit partial results on cycles
//! - **Weighted**: Dijkstra over integral weights with `replace_key`
//!   relaxation, shortest-path trees, Kruskal spanning forests
//! - **Closure**: in-place Floyd–Warshall transitive closure
//!
//! ## Architecture
//!
//! 1. **Collections** (`collections`):
//!    - `Arena<T>`: generational slots linked in insertion order
//!    - `Partition<E>`: union by size with path compression
//!    - `AdaptablePriorityQueue<K, V, O>`: binary heap whose entries know their slot
//!
//! 2. **Graph** (`graph`):
//!    - `AdjacencyMapGraph<V, E>`: the store
//!    - `graph::algorithms`: functions taking the store by reference
//!
//! Nothing here is synchronized; wrap a structure in a lock to share it across
//! threads.
//!
//! ## Example
//!
//! ```rust
//! use cartograph::{algorithms, AdjacencyMapGraph};
//!
//! let mut g = AdjacencyMapGraph::new(true);
//! let a = g.insert_vertex("A");
//! let b = g.insert_vertex("B");
//! let c = g.insert_vertex("C");
//! g.insert_edge(a, b, 1u32)?;
//! g.insert_edge(a, c, 4)?;
//! g.insert_edge(b, c, 1)?;
//!
//! let d = algorithms::shortest_path_lengths(&g, a)?;
//! assert_eq!(d[&c], 2);
//!
//! let order = algorithms::topological_sort(&g);
//! assert_eq!(order, vec![a, b, c]);
//! # Ok::<(), cartograph::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{
    AdaptablePriorityQueue, ClusterKey, CompareFn, KeyOrder, Locator, NaturalOrder, Partition,
    ReverseOrder,
};
pub use error::{Error, Result};
pub use graph::algorithms;
pub use graph::{AdjacencyMapGraph, EdgeKey, GraphStatistics, VertexKey};
