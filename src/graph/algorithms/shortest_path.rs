//! Single-source shortest paths (Dijkstra).
//!
//! Edge elements are the weights. Weights must be non-negative; a negative
//! weight is a precondition violation and the distances it produces are
//! meaningless. This is not checked at runtime.

use std::cmp::Ordering;
use std::collections::HashMap;

use num_traits::PrimInt;

use super::{Distances, Forest};
use crate::collections::{AdaptablePriorityQueue, KeyOrder, Locator};
use crate::error::Result;
use crate::graph::{AdjacencyMapGraph, VertexKey};

/// Tentative distances, with `None` (not reached yet) after every real distance.
#[derive(Debug, Clone, Copy, Default)]
struct UnreachedLast;

impl<W: Ord> KeyOrder<Option<W>> for UnreachedLast {
    fn compare(&self, a: &Option<W>, b: &Option<W>) -> Option<Ordering> {
        Some(match (a, b) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}

/// Computes the length of the shortest path from `src` to every vertex it reaches.
///
/// The returned map holds exactly the reachable vertices, in the order they were
/// settled (non-decreasing distance). Every value of `W` is a valid distance,
/// `W::max_value()` included. A path whose length would overflow `W` is treated
/// as absent.
///
/// ### Performance Characteristics
/// \(O((n + m) \log n)\) using one adaptable queue entry per vertex and
/// `replace_key` for relaxations.
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `src` is not
/// a live vertex of `g`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn shortest_path_lengths<V, W: PrimInt>(
    g: &AdjacencyMapGraph<V, W>,
    src: VertexKey,
) -> Result<Distances<W>> {
    g.vertex(src)?;
    let n = g.num_vertices();

    let mut tokens: HashMap<VertexKey, Locator> = HashMap::with_capacity(n);
    let mut pq: AdaptablePriorityQueue<Option<W>, VertexKey, UnreachedLast> =
        AdaptablePriorityQueue::with_capacity(n);
    let mut cloud = Distances::with_capacity(n);

    for v in g.vertices() {
        let dist = (v == src).then(W::zero);
        tokens.insert(v, pq.insert(dist, v)?);
    }

    while let Some((key, u)) = pq.remove_min() {
        let Some(du) = key else {
            // Everything left is unreachable.
            break;
        };
        cloud.insert(u, du);
        tokens.remove(&u);

        for e in g.outgoing_edges(u)? {
            let v = g.opposite(u, e)?;
            let Some(&locator) = tokens.get(&v) else {
                continue;
            };
            let Some(candidate) = du.checked_add(g.edge(e)?) else {
                continue;
            };
            let improves = match *pq.get(locator)?.0 {
                Some(best) => candidate < best,
                None => true,
            };
            if improves {
                pq.replace_key(locator, Some(candidate))?;
            }
        }
    }

    tracing::debug!(settled = cloud.len(), vertices = n, "shortest paths computed");
    Ok(cloud)
}

/// Rebuilds a shortest-path tree from distances computed by [`shortest_path_lengths`].
///
/// Each reachable vertex other than `s` maps to an incoming edge `(u, v)` with
/// `d[u] + weight == d[v]`. When several edges qualify the first one in `v`'s
/// incoming adjacency is taken, so different graphs with equal distances may
/// produce different but equally valid trees.
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `s`, or any
/// vertex in `d`, is not a live vertex of `g`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn shortest_path_tree<V, W: PrimInt>(
    g: &AdjacencyMapGraph<V, W>,
    s: VertexKey,
    d: &Distances<W>,
) -> Result<Forest> {
    g.vertex(s)?;
    let mut tree = Forest::with_capacity(d.len());

    for (&v, &dist) in d {
        if v == s {
            continue;
        }
        for e in g.incoming_edges(v)? {
            let u = g.opposite(v, e)?;
            let Some(&du) = d.get(&u) else {
                continue;
            };
            if du.checked_add(g.edge(e)?) == Some(dist) {
                tree.insert(v, e);
                break;
            }
        }
    }
    Ok(tree)
}
