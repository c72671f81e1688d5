mod common;

use cartograph::{AdjacencyMapGraph, EdgeKey, Error, GraphStatistics, VertexKey};
use common::{airports_directed, flight_distances};

#[test]
fn directed_fixture_counts_and_degrees() {
    let fx = airports_directed();
    let g = &fx.graph;

    assert!(g.is_directed());
    assert_eq!(g.num_vertices(), 7);
    assert_eq!(g.num_edges(), 16);
    assert_eq!(g.out_degree(fx.v("BOS")).unwrap(), 3);
    assert_eq!(g.out_degree(fx.v("JFK")).unwrap(), 4);
    assert_eq!(g.in_degree(fx.v("LAX")).unwrap(), 3);
    assert_eq!(g.in_degree(fx.v("SFO")).unwrap(), 3);

    let total_out: usize = g.vertices().map(|v| g.out_degree(v).unwrap()).sum();
    let total_in: usize = g.vertices().map(|v| g.in_degree(v).unwrap()).sum();
    assert_eq!(total_out, g.num_edges());
    assert_eq!(total_in, g.num_edges());
}

#[test]
fn vertices_iterate_in_insertion_order() {
    let fx = airports_directed();
    let labels: Vec<&str> = fx.graph.vertices().map(|v| fx.label(v)).collect();
    assert_eq!(labels, vec!["BOS", "DFW", "JFK", "LAX", "MIA", "ORD", "SFO"]);
}

#[test]
fn directed_edges_are_one_way() {
    let fx = airports_directed();
    let g = &fx.graph;

    let e = g.get_edge(fx.v("LAX"), fx.v("ORD")).unwrap().unwrap();
    assert_eq!(g.end_vertices(e).unwrap(), (fx.v("LAX"), fx.v("ORD")));
    assert!(g.get_edge(fx.v("ORD"), fx.v("LAX")).unwrap().is_none());
    assert_eq!(g.opposite(fx.v("ORD"), e).unwrap(), fx.v("LAX"));
    assert_eq!(g.opposite(fx.v("BOS"), e), Err(Error::IncidentMismatch));
}

#[test]
fn undirected_fixture_shares_adjacency() {
    let mut fx = flight_distances();
    let g = &fx.graph;

    assert!(!g.is_directed());
    assert_eq!(g.num_vertices(), 9);
    assert_eq!(g.num_edges(), 19);

    for v in g.vertices() {
        assert_eq!(g.out_degree(v).unwrap(), g.in_degree(v).unwrap());
        let out: Vec<EdgeKey> = g.outgoing_edges(v).unwrap().collect();
        let inc: Vec<EdgeKey> = g.incoming_edges(v).unwrap().collect();
        assert_eq!(out, inc);
    }
    assert_eq!(g.out_degree(fx.v("ORD")).unwrap(), 6);

    let e = g.get_edge(fx.v("JFK"), fx.v("BOS")).unwrap().unwrap();
    assert_eq!(g.get_edge(fx.v("BOS"), fx.v("JFK")).unwrap(), Some(e));
    assert_eq!(*g.edge(e).unwrap(), 187);
    assert_eq!(
        fx.graph.insert_edge(fx.v("BOS"), fx.v("JFK"), 1),
        Err(Error::DuplicateEdge)
    );
}

#[test]
fn remove_vertex_drops_incident_edges() {
    let mut fx = airports_directed();
    let ord = fx.v("ORD");
    let dfw = fx.v("DFW");
    let lax = fx.v("LAX");

    assert_eq!(fx.graph.remove_vertex(ord).unwrap(), "ORD");
    let g = &fx.graph;
    assert_eq!(g.num_vertices(), 6);
    assert_eq!(g.num_edges(), 12);
    assert!(!g.contains_vertex(ord));
    assert_eq!(g.out_degree(lax).unwrap(), 0);
    assert_eq!(g.in_degree(dfw).unwrap(), 2);

    for e in g.edges() {
        let (u, v) = g.end_vertices(e).unwrap();
        assert!(g.contains_vertex(u) && g.contains_vertex(v));
    }
    assert_eq!(g.out_degree(ord), Err(Error::InvalidVertex));
}

#[test]
fn stale_handles_stay_invalid_after_slot_reuse() {
    let mut g: AdjacencyMapGraph<&str, ()> = AdjacencyMapGraph::new(false);
    let a = g.insert_vertex("a");
    let b = g.insert_vertex("b");
    let ab = g.insert_edge(a, b, ()).unwrap();

    g.remove_edge(ab).unwrap();
    let ab2 = g.insert_edge(a, b, ()).unwrap();
    assert_ne!(ab, ab2);
    assert_eq!(g.edge(ab), Err(Error::InvalidEdge));
    assert_eq!(g.remove_edge(ab), Err(Error::InvalidEdge));

    g.remove_vertex(b).unwrap();
    let c = g.insert_vertex("c");
    assert_ne!(b, c);
    assert_eq!(g.vertex(b), Err(Error::InvalidVertex));
    assert_eq!(g.vertex(c), Ok(&"c"));
    assert!(!g.contains_edge(ab2));
}

#[test]
fn handles_do_not_cross_graphs() {
    let a = airports_directed();
    let b = airports_directed();
    let bos_a = a.v("BOS");
    assert!(!b.graph.contains_vertex(bos_a));
    assert_eq!(b.graph.vertex(bos_a), Err(Error::InvalidVertex));
    assert_eq!(
        b.graph.get_edge(bos_a, b.v("JFK")),
        Err(Error::InvalidVertex)
    );
}

#[test]
fn element_mutation() {
    let mut fx = flight_distances();
    let e = fx.graph.get_edge(fx.v("SFO"), fx.v("LAX")).unwrap().unwrap();
    *fx.graph.edge_mut(e).unwrap() += 1;
    assert_eq!(*fx.graph.edge(e).unwrap(), 338);

    let sfo = fx.v("SFO");
    fx.graph.vertex_mut(sfo).unwrap().push_str(" (closed)");
    assert_eq!(fx.graph.vertex(sfo).unwrap(), "SFO (closed)");
}

#[test]
fn display_lists_every_vertex() {
    let fx = airports_directed();
    let text = fx.graph.to_string();
    assert_eq!(text.lines().filter(|l| l.starts_with("Vertex ")).count(), 7);
    assert!(text.contains("Vertex BOS\n [outgoing] 3 adjacencies: (SFO, 1) (JFK, 1) (MIA, 1)"));
    assert!(text.contains(" [incoming] 1 adjacencies: (JFK, 1)"));
}

#[test]
fn statistics_and_serde() {
    let fx = flight_distances();
    let stats = fx.graph.statistics();
    assert_eq!(stats.vertex_count, 9);
    assert_eq!(stats.edge_count, 19);
    assert_eq!(stats.max_degree, 6);
    assert!((stats.average_degree - 38.0 / 9.0).abs() < 1e-9);

    let json = serde_json::to_string(&stats).unwrap();
    let back: GraphStatistics = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stats);

    let v = fx.v("BWI");
    let json = serde_json::to_string(&v).unwrap();
    let back: VertexKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
    assert!(fx.graph.contains_vertex(back));
}
