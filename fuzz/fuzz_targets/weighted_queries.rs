// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz test for `WeightedGraph` queries.
//!
//! Checks the symmetric matrix invariant, traversal coverage, Dijkstra's
//! triangle inequality over every edge and Prim against Kruskal.

use arbitrary::Arbitrary;
use graph_analysis::WeightedGraph;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    vertex_count: u8,
    edges: Vec<(u8, u8, u16)>,
    start: u8,
}

fuzz_target!(|input: FuzzInput| {
    if input.edges.len() > 300 {
        return;
    }
    let n = (input.vertex_count as usize % 32).max(1);
    let Ok(mut g) = WeightedGraph::with_vertex_count(n) else {
        return;
    };
    for &(u, v, w) in &input.edges {
        let before = g.edges();
        if g.add_edge(u as usize, v as usize, u64::from(w)).is_err() {
            assert_eq!(g.edges(), before);
        }
    }

    for u in 0..n {
        for v in 0..n {
            assert_eq!(g.weight(u, v).unwrap(), g.weight(v, u).unwrap());
        }
        assert_eq!(g.weight(u, u).unwrap(), None);
    }

    let start = input.start as usize % n;
    let bfs = g.bfs(start).unwrap();
    let dfs = g.dfs(start).unwrap();
    assert_eq!(bfs.len(), dfs.len());

    let paths = g.dijkstra(start).unwrap();
    assert_eq!(paths.reachable_count(), bfs.len());
    for (u, v, w) in g.edges() {
        if let (Some(du), Some(dv)) = (paths.distance(u).unwrap(), paths.distance(v).unwrap()) {
            assert!(dv <= du + w);
            assert!(du <= dv + w);
        }
    }

    if g.is_connected() {
        let prim = g.prim_mst();
        assert!(prim.is_spanning());
        assert_eq!(prim.total_weight, g.kruskal_mst().total_weight);
    }
});
