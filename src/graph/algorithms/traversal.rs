//! Depth-first and breadth-first search.
//!
//! Both searches record a discovery [`Forest`]: every vertex reached for the
//! first time maps to the edge it was reached through. Roots are absent from
//! the forest. DFS runs on an explicit stack so deep graphs cannot overflow the
//! call stack.

use super::{Forest, KnownSet};
use crate::error::Result;
use crate::graph::{AdjacencyMapGraph, EdgeKey, VertexKey};

/// Depth-first search from `u`, extending `known` and `forest`.
///
/// Vertices already in `known` are not re-entered, so successive calls with the
/// same sets explore disjoint regions.
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `u` is not
/// a live vertex of `g`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dfs<V, E>(
    g: &AdjacencyMapGraph<V, E>,
    u: VertexKey,
    known: &mut KnownSet,
    forest: &mut Forest,
) -> Result<()> {
    let mut stack = vec![(u, g.outgoing_edges(u)?)];
    known.insert(u);

    while let Some((w, edges)) = stack.last_mut() {
        let w = *w;
        let Some(e) = edges.next() else {
            stack.pop();
            continue;
        };
        let v = g.opposite(w, e)?;
        if known.insert(v) {
            forest.insert(v, e);
            stack.push((v, g.outgoing_edges(v)?));
        }
    }
    Ok(())
}

/// Breadth-first search from `s`, extending `known` and `forest`.
///
/// Vertices are discovered level by level, so the forest path from `s` to any
/// vertex it reaches uses the fewest possible edges.
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `s` is not
/// a live vertex of `g`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bfs<V, E>(
    g: &AdjacencyMapGraph<V, E>,
    s: VertexKey,
    known: &mut KnownSet,
    forest: &mut Forest,
) -> Result<()> {
    g.vertex(s)?;
    known.insert(s);

    let mut level = vec![s];
    let mut depth = 0usize;
    while !level.is_empty() {
        let mut next_level = Vec::new();
        for &u in &level {
            for e in g.outgoing_edges(u)? {
                let v = g.opposite(u, e)?;
                if known.insert(v) {
                    forest.insert(v, e);
                    next_level.push(v);
                }
            }
        }
        level = next_level;
        depth += 1;
    }
    tracing::trace!(levels = depth, "bfs finished");
    Ok(())
}

/// Runs [`dfs`] from every vertex not yet discovered, covering the whole graph.
///
/// # Errors
/// Propagates any error from [`dfs`]; none occurs on a consistent graph.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dfs_complete<V, E>(g: &AdjacencyMapGraph<V, E>) -> Result<Forest> {
    complete(g, dfs)
}

/// Runs [`bfs`] from every vertex not yet discovered, covering the whole graph.
///
/// # Errors
/// Propagates any error from [`bfs`]; none occurs on a consistent graph.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bfs_complete<V, E>(g: &AdjacencyMapGraph<V, E>) -> Result<Forest> {
    complete(g, bfs)
}

fn complete<V, E>(
    g: &AdjacencyMapGraph<V, E>,
    search: fn(&AdjacencyMapGraph<V, E>, VertexKey, &mut KnownSet, &mut Forest) -> Result<()>,
) -> Result<Forest> {
    let mut known = KnownSet::with_capacity(g.num_vertices());
    let mut forest = Forest::with_capacity(g.num_vertices());
    let mut roots = 0usize;

    for u in g.vertices() {
        if !known.contains(&u) {
            roots += 1;
            search(g, u, &mut known, &mut forest)?;
        }
    }
    tracing::debug!(discovered = known.len(), roots, "traversal covered graph");
    Ok(forest)
}

/// Returns the edges of the forest path from `u` to `v`, in order.
///
/// The path is empty when `v == u` or when `v` was not reached from `u` in
/// `forest`.
///
/// # Errors
/// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if either
/// vertex is not live in `g`, or an edge error if `forest` holds stale edges.
pub fn construct_path<V, E>(
    g: &AdjacencyMapGraph<V, E>,
    u: VertexKey,
    v: VertexKey,
    forest: &Forest,
) -> Result<Vec<EdgeKey>> {
    g.vertex(u)?;
    g.vertex(v)?;

    let mut path = Vec::new();
    let mut walk = v;
    while walk != u {
        let Some(&edge) = forest.get(&walk) else {
            return Ok(Vec::new());
        };
        // A forest has at most one edge per vertex; anything longer loops.
        if path.len() == forest.len() {
            return Ok(Vec::new());
        }
        path.push(edge);
        walk = g.opposite(walk, edge)?;
    }
    path.reverse();
    Ok(path)
}
