//! Shared fixtures: the airport and lettered graphs used throughout the
//! integration tests, built from textual edge lists.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use cartograph::{AdjacencyMapGraph, VertexKey};

/// A graph plus a lookup from vertex label to handle.
pub struct Fixture {
    pub graph: AdjacencyMapGraph<String, u32>,
    pub labels: BTreeMap<String, VertexKey>,
}

impl Fixture {
    pub fn v(&self, label: &str) -> VertexKey {
        self.labels[label]
    }

    pub fn label(&self, v: VertexKey) -> &str {
        self.graph.vertex(v).unwrap()
    }
}

/// Builds a graph from `(origin, destination, weight)` triples.
///
/// Vertices are inserted in alphabetical order of their labels, then edges in
/// list order.
pub fn from_edge_list(edges: &[(&str, &str, u32)], directed: bool) -> Fixture {
    let names: BTreeSet<&str> = edges.iter().flat_map(|&(a, b, _)| [a, b]).collect();

    let mut graph = AdjacencyMapGraph::with_capacity(directed, names.len(), edges.len());
    let labels: BTreeMap<String, VertexKey> = names
        .into_iter()
        .map(|name| (name.to_owned(), graph.insert_vertex(name.to_owned())))
        .collect();
    for &(a, b, w) in edges {
        graph.insert_edge(labels[a], labels[b], w).unwrap();
    }
    Fixture { graph, labels }
}

fn unit(edges: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str, u32)> {
    edges.iter().map(|&(a, b)| (a, b, 1)).collect()
}

/// Directed airline network with round trips (BOS <-> JFK) and a LAX/ORD/DFW cycle.
pub fn airports_directed() -> Fixture {
    let edges = unit(&[
        ("BOS", "SFO"), ("BOS", "JFK"), ("BOS", "MIA"), ("JFK", "BOS"),
        ("JFK", "DFW"), ("JFK", "MIA"), ("JFK", "SFO"), ("ORD", "DFW"),
        ("ORD", "MIA"), ("LAX", "ORD"), ("DFW", "SFO"), ("DFW", "ORD"),
        ("DFW", "LAX"), ("MIA", "DFW"), ("MIA", "LAX"), ("SFO", "LAX"),
    ]);
    from_edge_list(&edges, true)
}

/// Undirected 16-vertex lettered graph, A through P.
pub fn lettered_undirected() -> Fixture {
    let edges = unit(&[
        ("A", "B"), ("A", "E"), ("A", "F"), ("B", "C"), ("B", "F"),
        ("C", "D"), ("C", "G"), ("D", "G"), ("D", "H"), ("E", "F"),
        ("E", "I"), ("F", "I"), ("G", "J"), ("G", "K"), ("G", "L"),
        ("H", "L"), ("I", "J"), ("I", "M"), ("I", "N"), ("J", "K"),
        ("K", "N"), ("K", "O"), ("L", "P"), ("M", "N"),
    ]);
    from_edge_list(&edges, false)
}

/// Directed acyclic graph on A through H.
pub fn lettered_dag() -> Fixture {
    let edges = unit(&[
        ("A", "C"), ("A", "D"), ("B", "D"), ("B", "F"), ("C", "D"), ("C", "E"),
        ("C", "H"), ("D", "F"), ("E", "G"), ("F", "G"), ("F", "H"), ("G", "H"),
    ]);
    from_edge_list(&edges, true)
}

/// Weighted undirected flight-distance network over nine airports.
pub fn flight_distances() -> Fixture {
    from_edge_list(
        &[
            ("SFO", "LAX", 337), ("SFO", "BOS", 2704), ("SFO", "ORD", 1846),
            ("SFO", "DFW", 1464), ("LAX", "DFW", 1235), ("LAX", "MIA", 2342),
            ("DFW", "ORD", 802), ("DFW", "JFK", 1391), ("DFW", "MIA", 1121),
            ("ORD", "BOS", 867), ("ORD", "PVD", 849), ("ORD", "JFK", 740),
            ("ORD", "BWI", 621), ("MIA", "BWI", 946), ("MIA", "JFK", 1090),
            ("MIA", "BOS", 1258), ("BWI", "JFK", 184), ("JFK", "PVD", 144),
            ("JFK", "BOS", 187),
        ],
        false,
    )
}

/// Builds a graph with vertices `0..n` (inserted in order) from index triples.
pub fn indexed(
    n: usize,
    edges: &[(usize, usize, u32)],
    directed: bool,
) -> (AdjacencyMapGraph<usize, u32>, Vec<VertexKey>) {
    let mut graph = AdjacencyMapGraph::with_capacity(directed, n, edges.len());
    let vs: Vec<_> = (0..n).map(|i| graph.insert_vertex(i)).collect();
    for &(a, b, w) in edges {
        // Generated edge lists may repeat a pair; the first one wins.
        if graph.get_edge(vs[a], vs[b]).unwrap().is_none() {
            graph.insert_edge(vs[a], vs[b], w).unwrap();
        }
    }
    (graph, vs)
}
