use cartograph::{algorithms, AdjacencyMapGraph, VertexKey};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

const SIDE: usize = 40;

fn weight(i: usize, j: usize) -> u32 {
    ((i * 31 + j * 17) % 97 + 1) as u32
}

/// Undirected SIDE x SIDE grid with pseudo-random weights.
fn grid() -> (AdjacencyMapGraph<usize, u32>, Vec<VertexKey>) {
    let n = SIDE * SIDE;
    let mut g = AdjacencyMapGraph::with_capacity(false, n, 2 * n);
    let vs: Vec<_> = (0..n).map(|i| g.insert_vertex(i)).collect();
    for i in 0..n {
        if (i + 1) % SIDE != 0 {
            let _ = g.insert_edge(vs[i], vs[i + 1], weight(i, i + 1));
        }
        if i + SIDE < n {
            let _ = g.insert_edge(vs[i], vs[i + SIDE], weight(i, i + SIDE));
        }
    }
    (g, vs)
}

fn petgraph_grid() -> UnGraph<usize, u32> {
    let n = SIDE * SIDE;
    let mut g = UnGraph::with_capacity(n, 2 * n);
    for i in 0..n {
        g.add_node(i);
    }
    for i in 0..n {
        if (i + 1) % SIDE != 0 {
            g.add_edge(NodeIndex::new(i), NodeIndex::new(i + 1), weight(i, i + 1));
        }
        if i + SIDE < n {
            g.add_edge(NodeIndex::new(i), NodeIndex::new(i + SIDE), weight(i, i + SIDE));
        }
    }
    g
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");
    group.bench_function("adjacency_map_grid", |b| b.iter(|| black_box(grid().0.num_edges())));
    group.bench_function("petgraph_grid", |b| b.iter(|| black_box(petgraph_grid().edge_count())));
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    c.bench_function("adjacency_map_remove_every_other_vertex", |b| {
        b.iter_batched(
            grid,
            |(mut g, vs)| {
                for v in vs.into_iter().step_by(2) {
                    black_box(g.remove_vertex(v).ok());
                }
                g
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_algorithms(c: &mut Criterion) {
    let (g, vs) = grid();
    let pg = petgraph_grid();
    let mut group = c.benchmark_group("graph_algorithms");

    group.bench_function("bfs_complete", |b| {
        b.iter(|| black_box(algorithms::bfs_complete(&g).map(|f| f.len()).ok()));
    });
    group.bench_function("dfs_complete", |b| {
        b.iter(|| black_box(algorithms::dfs_complete(&g).map(|f| f.len()).ok()));
    });
    group.bench_function("petgraph_bfs", |b| {
        b.iter(|| {
            let mut bfs = petgraph::visit::Bfs::new(&pg, NodeIndex::new(0));
            let mut count = 0;
            while bfs.next(&pg).is_some() {
                count += 1;
            }
            black_box(count)
        });
    });

    group.bench_function("dijkstra", |b| {
        b.iter(|| black_box(algorithms::shortest_path_lengths(&g, vs[0]).map(|d| d.len()).ok()));
    });
    group.bench_function("petgraph_dijkstra", |b| {
        b.iter(|| {
            black_box(petgraph::algo::dijkstra(&pg, NodeIndex::new(0), None, |e| *e.weight()).len())
        });
    });

    group.bench_function("kruskal", |b| {
        b.iter(|| black_box(algorithms::minimum_spanning_tree(&g).map(|t| t.len()).ok()));
    });
    group.bench_function("petgraph_min_spanning_tree", |b| {
        b.iter(|| black_box(petgraph::algo::min_spanning_tree(&pg).count()));
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_removal, bench_algorithms);
criterion_main!(benches);
