//! Vertex and edge handles.
//!
//! Handles are small `Copy` tokens wrapping an [`ArenaKey`]. They are only
//! meaningful to the graph that minted them and only while their entity is in
//! that graph; every graph operation checks both before use.

use crate::collections::ArenaKey;
use serde::{Deserialize, Serialize};

/// Handle to a vertex of an [`AdjacencyMapGraph`](super::AdjacencyMapGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexKey(pub(crate) ArenaKey);

/// Handle to an edge of an [`AdjacencyMapGraph`](super::AdjacencyMapGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey(pub(crate) ArenaKey);

impl VertexKey {
    /// Storage slot of the vertex. Slots are reused after removal.
    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl EdgeKey {
    /// Storage slot of the edge. Slots are reused after removal.
    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }
}
