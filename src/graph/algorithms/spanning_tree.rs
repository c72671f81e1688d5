//! Minimum spanning tree (Kruskal).

use std::collections::HashMap;

use crate::collections::{AdaptablePriorityQueue, ClusterKey, Partition};
use crate::error::{Error, Result};
use crate::graph::{AdjacencyMapGraph, EdgeKey, VertexKey};

/// Computes a minimum spanning tree of `g` with Kruskal's algorithm.
///
/// Edge elements are the weights. Edges are taken in non-decreasing weight
/// order and kept whenever they join two different clusters of a [`Partition`].
/// A disconnected graph yields a spanning forest with fewer than
/// `num_vertices() - 1` edges. Direction is ignored.
///
/// # Errors
/// Returns [`Error::IncomparableKey`] if some weight cannot be ordered (for
/// example a floating-point `NaN`).
#[tracing::instrument(level = "debug", skip_all)]
pub fn minimum_spanning_tree<V, W>(g: &AdjacencyMapGraph<V, W>) -> Result<Vec<EdgeKey>>
where
    W: PartialOrd + Clone,
{
    let mut forest = Partition::with_capacity(g.num_vertices());
    let clusters: HashMap<VertexKey, ClusterKey> = g
        .vertices()
        .map(|v| (v, forest.make_cluster(v)))
        .collect();

    let entries = g
        .edges()
        .map(|e| Ok((g.edge(e)?.clone(), e)))
        .collect::<Result<Vec<_>>>()?;
    let mut pq: AdaptablePriorityQueue<W, EdgeKey> = AdaptablePriorityQueue::from_entries(entries)?;

    let target = g.num_vertices().saturating_sub(1);
    let mut tree = Vec::with_capacity(target);
    while tree.len() < target {
        let Some((_, edge)) = pq.remove_min() else {
            break;
        };
        let (u, v) = g.end_vertices(edge)?;
        let a = forest.find(*clusters.get(&u).ok_or(Error::InvalidVertex)?)?;
        let b = forest.find(*clusters.get(&v).ok_or(Error::InvalidVertex)?)?;
        if a != b {
            tree.push(edge);
            forest.union(a, b)?;
        }
    }

    if tree.len() < target {
        tracing::debug!(
            components = forest.cluster_count(),
            "graph is disconnected, returning a spanning forest"
        );
    }
    tracing::debug!(edges = tree.len(), "spanning tree chosen");
    Ok(tree)
}
