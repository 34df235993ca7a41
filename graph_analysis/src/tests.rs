// SPDX-License-Identifier: MIT OR Apache-2.0
use std::collections::BTreeSet;

use super::*;

const LETTERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn index_of(label: &str) -> usize {
    LETTERS.iter().position(|&l| l == label).unwrap()
}

fn labelled(graph: &WeightedGraph, vertices: &[usize]) -> Vec<String> {
    vertices
        .iter()
        .map(|&v| graph.label(v).unwrap().to_string())
        .collect()
}

fn weighted_five() -> WeightedGraph {
    let mut g = WeightedGraph::new(5, LETTERS[..5].iter().copied()).unwrap();
    for (u, v, w) in [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
    ] {
        g.add_edge(index_of(u), index_of(v), w).unwrap();
    }
    g
}

fn blocks_analyzer() -> BiconnectivityAnalyzer {
    let mut bc = BiconnectivityAnalyzer::new(6).unwrap();
    for (u, v) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "C"),
        ("B", "D"),
        ("D", "E"),
        ("D", "F"),
        ("E", "F"),
    ] {
        bc.add_edge(index_of(u), index_of(v)).unwrap();
    }
    bc
}

fn labelled_partition(
    result: &BiconnectedResult,
) -> BTreeSet<BTreeSet<(&'static str, &'static str)>> {
    result
        .partition()
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|(u, v)| (LETTERS[u], LETTERS[v]))
                .collect()
        })
        .collect()
}

#[test]
fn weighted_graph_traversals() {
    let g = weighted_five();
    assert_eq!(labelled(&g, &g.bfs(0).unwrap()), ["A", "B", "C", "D", "E"]);
    assert_eq!(labelled(&g, &g.dfs(0).unwrap()), ["A", "B", "C", "D", "E"]);
    assert_eq!(labelled(&g, &g.bfs(4).unwrap()), ["E", "C", "D", "A", "B"]);
    assert_eq!(labelled(&g, &g.dfs(4).unwrap()), ["E", "C", "A", "B", "D"]);
}

#[test]
fn weighted_graph_dijkstra_from_a() {
    let g = weighted_five();
    let paths = g.dijkstra(index_of("A")).unwrap();
    let expected = [("A", 0), ("B", 3), ("C", 2), ("D", 8), ("E", 10)];
    for (label, distance) in expected {
        assert_eq!(paths.distance(index_of(label)).unwrap(), Some(distance));
    }
}

#[test]
fn weighted_graph_prim_tree() {
    let g = weighted_five();
    let mst = g.prim_mst();
    let labelled_edges: Vec<_> = mst
        .edges
        .iter()
        .map(|e| (g.label(e.from).unwrap(), g.label(e.to).unwrap(), e.weight))
        .collect();
    assert_eq!(
        labelled_edges,
        vec![("A", "C", 2), ("C", "B", 1), ("B", "D", 5), ("D", "E", 2)]
    );
    assert_eq!(mst.edge_count(), g.vertex_count() - 1);
    assert_eq!(mst.total_weight, g.kruskal_mst().total_weight);
}

#[test]
fn weighted_graph_is_connected() {
    let g = weighted_five();
    assert!(g.is_connected());
    assert_eq!(g.edge_count(), 7);
}

#[test]
fn articulation_points_from_a_and_d() {
    let bc = blocks_analyzer();
    for start in ["A", "D"] {
        let result = bc.find_biconnected_components(index_of(start)).unwrap();
        let points: BTreeSet<_> = result
            .articulation_points
            .iter()
            .map(|&v| LETTERS[v])
            .collect();
        assert_eq!(points, BTreeSet::from(["B", "D"]));
    }
}

#[test]
fn biconnected_partition_from_a_and_d() {
    let bc = blocks_analyzer();
    let expected: BTreeSet<BTreeSet<(&str, &str)>> = BTreeSet::from([
        BTreeSet::from([("A", "B"), ("A", "C"), ("B", "C")]),
        BTreeSet::from([("B", "D")]),
        BTreeSet::from([("D", "E"), ("D", "F"), ("E", "F")]),
    ]);

    let from_a = bc.find_biconnected_components(index_of("A")).unwrap();
    let from_d = bc.find_biconnected_components(index_of("D")).unwrap();
    assert_eq!(labelled_partition(&from_a), expected);
    assert_eq!(labelled_partition(&from_d), expected);
}

#[test]
fn components_are_never_empty() {
    let bc = blocks_analyzer();
    for start in 0..bc.vertex_count() {
        let result = bc.find_biconnected_components(start).unwrap();
        assert!(result.components.iter().all(|c| !c.is_empty()));
        let total: usize = result.components.iter().map(BiconnectedComponent::len).sum();
        assert_eq!(total, bc.edge_count());
    }
}

#[test]
fn components_share_only_articulation_points() {
    let result = blocks_analyzer().find_biconnected_components(0).unwrap();
    for (i, a) in result.components.iter().enumerate() {
        for b in &result.components[i + 1..] {
            for shared in a.vertices().intersection(&b.vertices()) {
                assert!(result.articulation_points.contains(shared));
            }
        }
    }
}

#[test]
fn invalid_vertices_fail_fast_everywhere() {
    let mut g = weighted_five();
    let before = g.clone();
    let err = GraphError::InvalidVertex {
        vertex: 5,
        vertex_count: 5,
    };
    assert_eq!(g.add_edge(5, 0, 1), Err(err.clone()));
    assert_eq!(g.bfs(5), Err(err.clone()));
    assert_eq!(g.dfs(5), Err(err.clone()));
    assert_eq!(g.dijkstra(5), Err(err.clone()));
    assert_eq!(g.label(5), Err(err));
    assert_eq!(g, before);

    let mut bc = blocks_analyzer();
    let err = GraphError::InvalidVertex {
        vertex: 6,
        vertex_count: 6,
    };
    assert_eq!(bc.add_edge(0, 6), Err(err.clone()));
    assert_eq!(bc.find_biconnected_components(6), Err(err));
    assert_eq!(bc.edge_count(), 7);
}

#[test]
fn results_round_trip_through_json() {
    let g = weighted_five();
    let paths = g.dijkstra(index_of("A")).unwrap();
    let json = serde_json::to_string(&paths).unwrap();
    let decoded: ShortestPaths = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, paths);
    assert_eq!(decoded.path_to(index_of("E")).unwrap(), Some(vec![0, 2, 1, 3, 4]));

    let mst = g.prim_mst();
    let decoded: MstResult = serde_json::from_str(&serde_json::to_string(&mst).unwrap()).unwrap();
    assert_eq!(decoded, mst);

    let blocks = blocks_analyzer().find_biconnected_components(0).unwrap();
    let json = serde_json::to_string(&blocks).unwrap();
    let decoded: BiconnectedResult = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, blocks);
    assert_eq!(decoded.partition(), blocks.partition());

    let err = GraphError::SelfLoop(3);
    let decoded: GraphError = serde_json::from_str(&serde_json::to_string(&err).unwrap()).unwrap();
    assert_eq!(decoded, err);
}
