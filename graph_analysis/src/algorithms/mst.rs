// SPDX-License-Identifier: MIT OR Apache-2.0
//! Minimum spanning trees.
//!
//! [`WeightedGraph::prim_mst`] grows a single tree from vertex 0 using the
//! dense key-array form of Prim's algorithm. [`WeightedGraph::kruskal_mst`]
//! builds a minimum spanning forest with union-find and covers disconnected
//! graphs.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::WeightedGraph;

/// An edge in the MST result. For Prim, `from` is the parent already in the
/// tree and `to` the vertex it attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MstEdge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// Result of MST computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Edges in the order they were added.
    pub edges: Vec<MstEdge>,
    /// Total weight of all edges.
    pub total_weight: u64,
    /// Number of trees in the result (1 for Prim).
    pub tree_count: usize,
    /// Vertices covered by the result, in the order they joined.
    pub nodes: Vec<usize>,
    /// Vertex count of the graph the result was computed on.
    pub vertex_count: usize,
}

impl MstResult {
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the edges span the whole graph, i.e. there are exactly
    /// `vertex_count - 1` of them.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count
    }
}

/// Union-Find with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false; // Already in same set
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            },
        }
        true
    }
}

impl WeightedGraph {
    /// Minimum spanning tree rooted at vertex 0 (Prim).
    ///
    /// The graph must be connected. Vertices outside vertex 0's component
    /// never receive a finite key, so no edge is emitted for them; check
    /// [`MstResult::is_spanning`] to detect this.
    ///
    /// Time complexity: O(V²)
    #[must_use]
    #[instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn prim_mst(&self) -> MstResult {
        let n = self.vertex_count();
        let mut key: Vec<Option<u64>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut in_tree = vec![false; n];
        key[0] = Some(0);

        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut nodes = Vec::with_capacity(n);
        let mut total_weight: u64 = 0;

        for _ in 0..n {
            // Lowest finite key, ties to the lower index.
            let mut selected: Option<(usize, u64)> = None;
            for (i, k) in key.iter().enumerate() {
                if let Some(k) = *k {
                    if !in_tree[i] && selected.map_or(true, |(_, best)| k < best) {
                        selected = Some((i, k));
                    }
                }
            }
            let Some((u, _)) = selected else {
                break;
            };

            in_tree[u] = true;
            nodes.push(u);
            if let Some(p) = parent[u] {
                let weight = self.raw_weight(p, u);
                total_weight = total_weight.saturating_add(weight);
                edges.push(MstEdge {
                    from: p,
                    to: u,
                    weight,
                });
            }

            for (v, w) in self.neighbor_iter(u) {
                if !in_tree[v] && key[v].map_or(true, |k| w < k) {
                    key[v] = Some(w);
                    parent[v] = Some(u);
                }
            }
        }

        if nodes.len() < n {
            warn!(
                reached = nodes.len(),
                vertex_count = n,
                "graph is disconnected, spanning tree only covers vertex 0's component"
            );
        }
        debug!(edges = edges.len(), total_weight, "prim complete");

        MstResult {
            edges,
            total_weight,
            tree_count: 1,
            nodes,
            vertex_count: n,
        }
    }

    /// Minimum spanning forest (Kruskal). Equal weights are ordered by
    /// `(from, to)`.
    ///
    /// Time complexity: O(E log E) for sorting edges.
    #[must_use]
    #[instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn kruskal_mst(&self) -> MstResult {
        let n = self.vertex_count();
        let mut weighted_edges = self.edges();
        weighted_edges.sort_unstable_by_key(|&(from, to, weight)| (weight, from, to));

        let mut uf = UnionFind::new(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut total_weight: u64 = 0;

        for (from, to, weight) in weighted_edges {
            if uf.union(from, to) {
                edges.push(MstEdge { from, to, weight });
                total_weight = total_weight.saturating_add(weight);
                if edges.len() + 1 == n {
                    break;
                }
            }
        }

        let tree_count = n - edges.len();
        debug!(edges = edges.len(), tree_count, total_weight, "kruskal complete");

        MstResult {
            edges,
            total_weight,
            tree_count,
            nodes: (0..n).collect(),
            vertex_count: n,
        }
    }
}
