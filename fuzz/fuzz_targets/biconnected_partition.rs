// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz test for biconnected decomposition.
//!
//! Every edge must land in exactly one component and the articulation point
//! set must not depend on the start vertex.

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use graph_analysis::{AnalysisConfig, BiconnectivityAnalyzer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    vertex_count: u8,
    edges: Vec<(u8, u8)>,
    start: u8,
    recursive: bool,
}

fuzz_target!(|input: FuzzInput| {
    if input.edges.len() > 500 {
        return;
    }
    let n = (input.vertex_count as usize % 64).max(1);

    let config = if input.recursive {
        AnalysisConfig::new().recursive()
    } else {
        AnalysisConfig::new()
    };
    let Ok(mut analyzer) = BiconnectivityAnalyzer::with_config(n, config) else {
        return;
    };
    for &(u, v) in &input.edges {
        // Out-of-range and self loops are rejected without mutation.
        let before = analyzer.edge_count();
        if analyzer.add_edge(u as usize, v as usize).is_err() {
            assert_eq!(analyzer.edge_count(), before);
        }
    }

    let start = input.start as usize % n;
    let result = analyzer.find_biconnected_components(start).unwrap();
    let reference = analyzer.find_biconnected_components(0).unwrap();

    assert_eq!(result.articulation_points, reference.articulation_points);
    assert_eq!(result.partition(), reference.partition());

    let total: usize = result.components.iter().map(|c| c.len()).sum();
    assert_eq!(total, analyzer.edge_count(), "edge lost or duplicated");
    assert!(result.components.iter().all(|c| !c.is_empty()));

    for v in 0..n {
        assert!(result.low_link[v] <= result.discovery_time[v]);
    }

    let roots: BTreeSet<usize> = result.roots.iter().copied().collect();
    assert_eq!(roots.len(), result.roots.len());
    assert_eq!(result.roots[0], start);
});
