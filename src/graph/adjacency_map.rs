//! A dynamic adjacency-map graph.
//!
//! Every vertex owns a map from neighbor to connecting edge. Directed graphs keep
//! two maps per vertex (outgoing and incoming); undirected graphs keep a single
//! map that serves both roles, so `outgoing_edges(v)` and `incoming_edges(v)`
//! are the same sequence by construction.
//!
//! Vertices and edges live in generational arenas and are addressed through
//! [`VertexKey`] / [`EdgeKey`] handles. A handle from another graph, or one
//! whose entity was removed, is rejected with [`Error::InvalidVertex`] /
//! [`Error::InvalidEdge`].

use core::fmt;

use indexmap::IndexMap;

use super::handles::{EdgeKey, VertexKey};
use super::stats::GraphStatistics;
use crate::collections::Arena;
use crate::error::{Error, Result};

/// Neighbor vertex -> connecting edge.
pub(crate) type Adjacency = IndexMap<VertexKey, EdgeKey>;

struct VertexNode<V> {
    element: V,
    outgoing: Adjacency,
    /// Left empty in undirected graphs, where `outgoing` plays both roles.
    incoming: Adjacency,
}

struct EdgeNode<E> {
    element: E,
    /// `(origin, destination)`; arbitrary but fixed for undirected graphs.
    endpoints: (VertexKey, VertexKey),
}

/// A graph storing one adjacency map per vertex.
///
/// At most one edge exists per ordered vertex pair (per unordered pair when
/// undirected).
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert_vertex` | \(O(1)\) amortized | Arena append or slot reuse |
/// | `insert_edge` | \(O(1)\) amortized | Hash lookup for duplicates |
/// | `get_edge` | \(O(1)\) amortized | Hash lookup in the origin's map |
/// | `remove_edge` | \(O(1)\) amortized | Swap-removes from both endpoint maps |
/// | `remove_vertex` | \(O(\deg v)\) | Removes every incident edge first |
/// | `out_degree` / `in_degree` | \(O(1)\) | Map length |
pub struct AdjacencyMapGraph<V, E> {
    directed: bool,
    vertices: Arena<VertexNode<V>>,
    edges: Arena<EdgeNode<E>>,
}

impl<V, E> AdjacencyMapGraph<V, E> {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0, 0)
    }

    /// Creates an empty graph with room for the given numbers of vertices and edges.
    pub fn with_capacity(directed: bool, vertices: usize, edges: usize) -> Self {
        Self {
            directed,
            vertices: Arena::with_capacity(vertices),
            edges: Arena::with_capacity(edges),
        }
    }

    /// Returns `true` if edges are directed.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.vertices.keys().map(VertexKey)
    }

    /// Iterates all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.keys().map(EdgeKey)
    }

    /// Returns `true` if `v` is a live vertex of this graph.
    pub fn contains_vertex(&self, v: VertexKey) -> bool {
        self.vertices.contains(v.0)
    }

    /// Returns `true` if `e` is a live edge of this graph.
    pub fn contains_edge(&self, e: EdgeKey) -> bool {
        self.edges.contains(e.0)
    }

    /// Returns the element stored at vertex `v`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if `v` is not a live vertex of this graph.
    pub fn vertex(&self, v: VertexKey) -> Result<&V> {
        Ok(&self.vertex_node(v)?.element)
    }

    /// Returns the element stored at vertex `v`, mutably.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if `v` is not a live vertex of this graph.
    pub fn vertex_mut(&mut self, v: VertexKey) -> Result<&mut V> {
        self.vertices
            .get_mut(v.0)
            .map(|node| &mut node.element)
            .ok_or(Error::InvalidVertex)
    }

    /// Returns the element stored at edge `e`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidEdge`] if `e` is not a live edge of this graph.
    pub fn edge(&self, e: EdgeKey) -> Result<&E> {
        Ok(&self.edge_node(e)?.element)
    }

    /// Returns the element stored at edge `e`, mutably.
    ///
    /// # Errors
    /// Returns [`Error::InvalidEdge`] if `e` is not a live edge of this graph.
    pub fn edge_mut(&mut self, e: EdgeKey) -> Result<&mut E> {
        self.edges
            .get_mut(e.0)
            .map(|node| &mut node.element)
            .ok_or(Error::InvalidEdge)
    }

    /// Returns the number of edges for which `v` is the origin.
    ///
    /// Equal to [`in_degree`](Self::in_degree) for undirected graphs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if `v` is not a live vertex of this graph.
    pub fn out_degree(&self, v: VertexKey) -> Result<usize> {
        Ok(self.vertex_node(v)?.outgoing.len())
    }

    /// Returns the number of edges for which `v` is the destination.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if `v` is not a live vertex of this graph.
    pub fn in_degree(&self, v: VertexKey) -> Result<usize> {
        let node = self.vertex_node(v)?;
        Ok(self.incoming_of(node).len())
    }

    /// Iterates the edges for which `v` is the origin.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if `v` is not a live vertex of this graph.
    pub fn outgoing_edges(&self, v: VertexKey) -> Result<impl Iterator<Item = EdgeKey> + '_> {
        Ok(self.vertex_node(v)?.outgoing.values().copied())
    }

    /// Iterates the edges for which `v` is the destination.
    ///
    /// Identical to [`outgoing_edges`](Self::outgoing_edges) for undirected graphs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if `v` is not a live vertex of this graph.
    pub fn incoming_edges(&self, v: VertexKey) -> Result<impl Iterator<Item = EdgeKey> + '_> {
        let node = self.vertex_node(v)?;
        Ok(self.incoming_of(node).values().copied())
    }

    /// Returns the edge from `u` to `v`, if any.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if either handle is not a live vertex of this graph.
    pub fn get_edge(&self, u: VertexKey, v: VertexKey) -> Result<Option<EdgeKey>> {
        let origin = self.vertex_node(u)?;
        self.vertex_node(v)?;
        Ok(origin.outgoing.get(&v).copied())
    }

    /// Returns the endpoints `(origin, destination)` of `e`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidEdge`] if `e` is not a live edge of this graph.
    pub fn end_vertices(&self, e: EdgeKey) -> Result<(VertexKey, VertexKey)> {
        Ok(self.edge_node(e)?.endpoints)
    }

    /// Returns the endpoint of `e` opposite to `v`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidEdge`] / [`Error::InvalidVertex`] for bad handles and
    /// [`Error::IncidentMismatch`] if `v` is not an endpoint of `e`.
    pub fn opposite(&self, v: VertexKey, e: EdgeKey) -> Result<VertexKey> {
        let (origin, destination) = self.edge_node(e)?.endpoints;
        self.vertex_node(v)?;
        if origin == v {
            Ok(destination)
        } else if destination == v {
            Ok(origin)
        } else {
            Err(Error::IncidentMismatch)
        }
    }

    /// Inserts a vertex storing `element` and returns its handle.
    ///
    /// # Panics
    /// Panics if the graph would hold more than `u32::MAX` vertex slots.
    pub fn insert_vertex(&mut self, element: V) -> VertexKey {
        let v = VertexKey(self.vertices.insert(VertexNode {
            element,
            outgoing: Adjacency::new(),
            incoming: Adjacency::new(),
        }));
        tracing::trace!(vertex = v.index(), "inserted vertex");
        v
    }

    /// Inserts an edge from `u` to `v` storing `element`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if either handle is not a live vertex of
    /// this graph and [`Error::DuplicateEdge`] if an edge `(u, v)` already exists.
    ///
    /// # Panics
    /// Panics if the graph would hold more than `u32::MAX` edge slots.
    pub fn insert_edge(&mut self, u: VertexKey, v: VertexKey, element: E) -> Result<EdgeKey> {
        if self.get_edge(u, v)?.is_some() {
            return Err(Error::DuplicateEdge);
        }
        let e = EdgeKey(self.edges.insert(EdgeNode {
            element,
            endpoints: (u, v),
        }));

        let directed = self.directed;
        let origin = self.vertices.get_mut(u.0).ok_or(Error::InvalidVertex)?;
        origin.outgoing.insert(v, e);
        let dest = self.vertices.get_mut(v.0).ok_or(Error::InvalidVertex)?;
        if directed {
            dest.incoming.insert(u, e);
        } else {
            dest.outgoing.insert(u, e);
        }

        tracing::trace!(edge = e.index(), origin = u.index(), destination = v.index(), "inserted edge");
        Ok(e)
    }

    /// Removes `v` and every edge incident to it, returning its element.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVertex`] if `v` is not a live vertex of this graph.
    pub fn remove_vertex(&mut self, v: VertexKey) -> Result<V> {
        let outgoing: Vec<EdgeKey> = self.outgoing_edges(v)?.collect();
        for e in outgoing {
            self.remove_edge(e)?;
        }
        // Directed graphs still hold the incoming side; undirected maps are empty by now.
        let incoming: Vec<EdgeKey> = self.incoming_edges(v)?.collect();
        for e in incoming {
            self.remove_edge(e)?;
        }

        let node = self.vertices.remove(v.0).ok_or(Error::InvalidVertex)?;
        tracing::trace!(vertex = v.index(), "removed vertex");
        Ok(node.element)
    }

    /// Removes `e` from both endpoints' adjacency maps, returning its element.
    ///
    /// # Errors
    /// Returns [`Error::InvalidEdge`] if `e` is not a live edge of this graph.
    pub fn remove_edge(&mut self, e: EdgeKey) -> Result<E> {
        let (origin, destination) = self.edge_node(e)?.endpoints;
        let directed = self.directed;

        if let Some(node) = self.vertices.get_mut(origin.0) {
            node.outgoing.swap_remove(&destination);
        }
        if let Some(node) = self.vertices.get_mut(destination.0) {
            if directed {
                node.incoming.swap_remove(&origin);
            } else {
                node.outgoing.swap_remove(&origin);
            }
        }

        let node = self.edges.remove(e.0).ok_or(Error::InvalidEdge)?;
        tracing::trace!(edge = e.index(), "removed edge");
        Ok(node.element)
    }

    /// Computes basic degree statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let degrees = self
            .vertices
            .iter()
            .map(|(_, node)| node.outgoing.len())
            .collect();
        GraphStatistics::from_degrees(self.directed, self.num_edges(), degrees)
    }

    /// Outgoing adjacency of a live vertex.
    pub(crate) fn out_adjacency(&self, v: VertexKey) -> Option<&Adjacency> {
        self.vertices.get(v.0).map(|node| &node.outgoing)
    }

    /// Incoming adjacency of a live vertex.
    pub(crate) fn in_adjacency(&self, v: VertexKey) -> Option<&Adjacency> {
        self.vertices.get(v.0).map(|node| self.incoming_of(node))
    }

    fn vertex_node(&self, v: VertexKey) -> Result<&VertexNode<V>> {
        self.vertices.get(v.0).ok_or(Error::InvalidVertex)
    }

    fn edge_node(&self, e: EdgeKey) -> Result<&EdgeNode<E>> {
        self.edges.get(e.0).ok_or(Error::InvalidEdge)
    }

    #[inline]
    fn incoming_of<'a>(&self, node: &'a VertexNode<V>) -> &'a Adjacency {
        if self.directed {
            &node.incoming
        } else {
            &node.outgoing
        }
    }

    fn fmt_adjacency(&self, f: &mut fmt::Formatter<'_>, label: &str, map: &Adjacency) -> fmt::Result
    where
        V: fmt::Display,
        E: fmt::Display,
    {
        write!(f, " {label}{} adjacencies:", map.len())?;
        for (&neighbor, &e) in map {
            if let (Ok(n), Ok(w)) = (self.vertex(neighbor), self.edge(e)) {
                write!(f, " ({n}, {w})")?;
            }
        }
        writeln!(f)
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for AdjacencyMapGraph<V, E> {
    /// Lists every vertex with its adjacencies as `(neighbor, edge element)` pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.vertices.iter() {
            writeln!(f, "Vertex {}", node.element)?;
            if self.directed {
                self.fmt_adjacency(f, "[outgoing] ", &node.outgoing)?;
                self.fmt_adjacency(f, "[incoming] ", &node.incoming)?;
            } else {
                self.fmt_adjacency(f, "", &node.outgoing)?;
            }
        }
        Ok(())
    }
}

impl<V, E> fmt::Debug for AdjacencyMapGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyMapGraph")
            .field("directed", &self.directed)
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}
