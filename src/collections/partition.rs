//! `Partition` - a union-find forest over caller-supplied elements.
//!
//! Each element placed into the partition gets a [`ClusterKey`] locator. Cluster
//! leaders are self-parented; `find` compresses every visited node directly onto
//! the leader and `union` hangs the smaller cluster under the larger one.
//!
//! # Performance
//!
//! - Parent pointers live in `Cell<u32>`, so `find` takes `&self` even though it
//!   rewrites the path it walks.
//! - Nodes are stored contiguously; locators are plain indices plus an owner id.
//! - Path compression and union-by-size give near-constant amortized operations.

use crate::collections::arena::next_owner_id;
use crate::error::{Error, Result};
use core::cell::Cell;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A locator for an element placed into a [`Partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterKey {
    owner: u32,
    index: u32,
}

impl ClusterKey {
    /// Position of the element in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

struct ClusterNode<E> {
    element: E,
    /// Parent pointer. Uses `Cell` to allow path compression behind `&self`.
    parent: Cell<u32>,
    /// Number of nodes in the subtree; only meaningful on leaders.
    size: usize,
}

/// A disjoint-set forest with path compression and union by size.
pub struct Partition<E> {
    owner: u32,
    nodes: Vec<ClusterNode<E>>,
    clusters: usize,
}

impl<E> Partition<E> {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty partition with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: next_owner_id(),
            nodes: Vec::with_capacity(capacity),
            clusters: 0,
        }
    }

    /// Makes a new singleton cluster holding `element` and returns its locator.
    ///
    /// # Panics
    /// Panics if the partition would hold more than `u32::MAX` elements.
    pub fn make_cluster(&mut self, element: E) -> ClusterKey {
        let index = u32::try_from(self.nodes.len()).expect("partition exceeds u32::MAX elements");
        self.nodes.push(ClusterNode {
            element,
            parent: Cell::new(index),
            size: 1,
        });
        self.clusters += 1;
        ClusterKey {
            owner: self.owner,
            index,
        }
    }

    /// Finds the leader of the cluster containing `key`, with path compression.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] if `key` belongs to another partition.
    pub fn find(&self, key: ClusterKey) -> Result<ClusterKey> {
        let start = self.validate(key)?;

        // Two passes: locate the root, then point every node on the path at it.
        let mut root = start;
        loop {
            let parent = self.nodes[root as usize].parent.get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = start;
        while curr != root {
            let cell = &self.nodes[curr as usize].parent;
            let parent = cell.get();
            cell.set(root);
            curr = parent;
        }

        Ok(ClusterKey {
            owner: self.owner,
            index: root,
        })
    }

    /// Merges the clusters containing `a` and `b`.
    ///
    /// Returns `true` if they were in different clusters. The larger cluster's
    /// leader survives; on equal sizes `b`'s leader does.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] if either key belongs to another partition.
    pub fn union(&mut self, a: ClusterKey, b: ClusterKey) -> Result<bool> {
        let root_a = self.find(a)?.index;
        let root_b = self.find(b)?.index;
        if root_a == root_b {
            return Ok(false);
        }

        let size_a = self.nodes[root_a as usize].size;
        let size_b = self.nodes[root_b as usize].size;
        let (leader, child) = if size_a > size_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.nodes[child as usize].parent.set(leader);
        self.nodes[leader as usize].size = size_a + size_b;
        self.clusters -= 1;

        tracing::trace!(leader, child, size = size_a + size_b, "partition union");
        Ok(true)
    }

    /// Returns `true` if `a` and `b` share a cluster leader.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] if either key belongs to another partition.
    pub fn same_cluster(&self, a: ClusterKey, b: ClusterKey) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Returns the element stored under `key`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] if `key` belongs to another partition.
    pub fn element(&self, key: ClusterKey) -> Result<&E> {
        let idx = self.validate(key)?;
        Ok(&self.nodes[idx as usize].element)
    }

    /// Returns the number of elements in the cluster containing `key`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] if `key` belongs to another partition.
    pub fn cluster_size(&self, key: ClusterKey) -> Result<usize> {
        let leader = self.find(key)?;
        Ok(self.nodes[leader.index()].size)
    }

    /// Returns the number of elements in the partition.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of disjoint clusters.
    pub fn cluster_count(&self) -> usize {
        self.clusters
    }

    fn validate(&self, key: ClusterKey) -> Result<u32> {
        if key.owner != self.owner || key.index() >= self.nodes.len() {
            return Err(Error::InvalidLocator);
        }
        Ok(key.index)
    }
}

impl<E> Default for Partition<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Partition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("len", &self.len())
            .field("clusters", &self.clusters)
            .finish()
    }
}
