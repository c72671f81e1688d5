//! Topological ordering of directed graphs.

use std::collections::HashMap;

use crate::graph::{AdjacencyMapGraph, VertexKey};

/// Returns the vertices of `g` in topological order.
///
/// Vertices are emitted once all of their predecessors have been. On a graph
/// with a cycle, the vertices on or downstream of the cycle never become
/// ready, so the result is shorter than [`num_vertices`](AdjacencyMapGraph::num_vertices).
/// Among simultaneously ready vertices the most recently readied goes first.
#[tracing::instrument(level = "debug", skip_all)]
pub fn topological_sort<V, E>(g: &AdjacencyMapGraph<V, E>) -> Vec<VertexKey> {
    let mut order = Vec::with_capacity(g.num_vertices());
    let mut ready = Vec::new();
    let mut in_count: HashMap<VertexKey, usize> = HashMap::with_capacity(g.num_vertices());

    for u in g.vertices() {
        let degree = g.in_adjacency(u).map_or(0, |incoming| incoming.len());
        if degree == 0 {
            ready.push(u);
        } else {
            in_count.insert(u, degree);
        }
    }

    while let Some(u) = ready.pop() {
        order.push(u);
        let Some(outgoing) = g.out_adjacency(u) else {
            continue;
        };
        for &v in outgoing.keys() {
            if let Some(remaining) = in_count.get_mut(&v) {
                *remaining -= 1;
                if *remaining == 0 {
                    in_count.remove(&v);
                    ready.push(v);
                }
            }
        }
    }

    if order.len() < g.num_vertices() {
        tracing::debug!(
            ordered = order.len(),
            blocked = g.num_vertices() - order.len(),
            "cycle prevents a complete topological order"
        );
    }
    order
}

/// Returns `true` if `g` has no directed cycle.
pub fn is_acyclic<V, E>(g: &AdjacencyMapGraph<V, E>) -> bool {
    topological_sort(g).len() == g.num_vertices()
}
