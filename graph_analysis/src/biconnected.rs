// SPDX-License-Identifier: MIT OR Apache-2.0
//! Biconnected components and articulation points.
//!
//! - Articulation point: A vertex whose removal disconnects the graph
//! - Bridge: An edge whose removal disconnects the graph
//! - Biconnected component: A maximal edge set with no articulation point
//!   internal to it
//!
//! [`BiconnectivityAnalyzer`] stores a sparse, unweighted adjacency list and
//! runs Tarjan's edge-stack algorithm over the whole DFS forest.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::check_vertex, AnalysisConfig, DfsStrategy, GraphError, Result};

/// One biconnected component: its edges in the order they were popped off the
/// edge stack, each oriented as it was traversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiconnectedComponent {
    edges: Vec<(usize, usize)>,
}

impl BiconnectedComponent {
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges as `(min, max)` pairs, independent of traversal direction.
    #[must_use]
    pub fn normalized(&self) -> BTreeSet<(usize, usize)> {
        self.edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect()
    }

    /// Every vertex touched by the component.
    #[must_use]
    pub fn vertices(&self) -> BTreeSet<usize> {
        self.edges.iter().flat_map(|&(u, v)| [u, v]).collect()
    }

    /// Whether the component holds edge `u - v` in either orientation.
    #[must_use]
    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.edges
            .iter()
            .any(|&(a, b)| (a, b) == (u, v) || (a, b) == (v, u))
    }
}

/// Result of biconnected component analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiconnectedResult {
    /// Articulation points (cut vertices).
    pub articulation_points: BTreeSet<usize>,
    /// Biconnected components in the order they were closed.
    pub components: Vec<BiconnectedComponent>,
    /// DFS discovery time per vertex, starting at 1.
    pub discovery_time: Vec<usize>,
    /// Smallest discovery time reachable from each vertex's subtree through at
    /// most one back edge.
    pub low_link: Vec<usize>,
    /// DFS tree parent per vertex, `None` for roots.
    pub parent: Vec<Option<usize>>,
    /// Roots of the DFS forest; the requested start vertex comes first.
    pub roots: Vec<usize>,
}

impl BiconnectedResult {
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Bridges (cut edges) as `(min, max)` pairs: the single-edge components.
    #[must_use]
    pub fn bridges(&self) -> Vec<(usize, usize)> {
        self.components
            .iter()
            .filter(|c| c.len() == 1)
            .flat_map(BiconnectedComponent::normalized)
            .collect()
    }

    #[must_use]
    pub fn has_bridges(&self) -> bool {
        self.components.iter().any(|c| c.len() == 1)
    }

    /// Whether the graph is connected and has no articulation point.
    #[must_use]
    pub fn is_biconnected(&self) -> bool {
        self.roots.len() == 1 && self.articulation_points.is_empty()
    }

    /// Components as normalized edge sets. Equal for every start vertex.
    #[must_use]
    pub fn partition(&self) -> BTreeSet<BTreeSet<(usize, usize)>> {
        self.components
            .iter()
            .map(BiconnectedComponent::normalized)
            .collect()
    }
}

/// An edge on the Tarjan edge stack. `id` identifies the `add_edge` call so
/// parallel edges stay distinct.
#[derive(Debug, Clone, Copy)]
struct StackedEdge {
    u: usize,
    v: usize,
    id: usize,
}

/// Internal state for one run of Tarjan's biconnected components algorithm.
struct TarjanState {
    clock: usize,
    visited: Vec<bool>,
    discovery: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<Option<usize>>,
    edge_stack: Vec<StackedEdge>,
    articulation_points: BTreeSet<usize>,
    components: Vec<BiconnectedComponent>,
    roots: Vec<usize>,
}

impl TarjanState {
    fn new(vertex_count: usize) -> Self {
        Self {
            clock: 0,
            visited: vec![false; vertex_count],
            discovery: vec![0; vertex_count],
            low: vec![0; vertex_count],
            parent: vec![None; vertex_count],
            edge_stack: Vec::new(),
            articulation_points: BTreeSet::new(),
            components: Vec::new(),
            roots: Vec::new(),
        }
    }

    fn discover(&mut self, u: usize) {
        self.visited[u] = true;
        self.clock += 1;
        self.discovery[u] = self.clock;
        self.low[u] = self.clock;
    }

    fn tree_edge(&mut self, u: usize, v: usize, id: usize) {
        self.parent[v] = Some(u);
        self.edge_stack.push(StackedEdge { u, v, id });
    }

    /// Non-tree edge from `u` to the already visited `v`. Only edges leading
    /// to an ancestor count; the reverse direction was pushed from below.
    fn visited_edge(&mut self, u: usize, v: usize, id: usize) {
        if self.discovery[v] < self.discovery[u] {
            self.edge_stack.push(StackedEdge { u, v, id });
            self.low[u] = self.low[u].min(self.discovery[v]);
        }
    }

    /// Called once the subtree of `v`, entered from `u` via edge `id`, is done.
    /// `children` counts `u`'s tree children so far, `v` included.
    fn finish_child(&mut self, u: usize, v: usize, id: usize, children: usize) {
        self.low[u] = self.low[u].min(self.low[v]);

        let closes = self.low[v] >= self.discovery[u];
        let is_articulation = if self.parent[u].is_none() {
            children > 1
        } else {
            closes
        };
        if is_articulation {
            self.articulation_points.insert(u);
        }

        if closes {
            let mut edges = Vec::new();
            while let Some(edge) = self.edge_stack.pop() {
                edges.push((edge.u, edge.v));
                if edge.id == id {
                    break;
                }
            }
            debug!(u, v, size = edges.len(), "biconnected component closed");
            self.components.push(BiconnectedComponent { edges });
        }
    }

    fn into_result(self) -> BiconnectedResult {
        BiconnectedResult {
            articulation_points: self.articulation_points,
            components: self.components,
            discovery_time: self.discovery,
            low_link: self.low,
            parent: self.parent,
            roots: self.roots,
        }
    }
}

/// Simulated call frame for the explicit-stack search.
struct Frame {
    vertex: usize,
    /// Tree edge this vertex was entered through.
    parent_edge: Option<usize>,
    /// Next adjacency position to examine.
    next: usize,
    children: usize,
}

impl Frame {
    const fn new(vertex: usize, parent_edge: Option<usize>) -> Self {
        Self {
            vertex,
            parent_edge,
            next: 0,
            children: 0,
        }
    }
}

/// Undirected, unweighted graph for articulation point and biconnected
/// component queries.
#[derive(Debug, Clone)]
pub struct BiconnectivityAnalyzer {
    /// `(neighbor, edge id)` in insertion order.
    adjacency: Vec<Vec<(usize, usize)>>,
    edge_count: usize,
    config: AnalysisConfig,
}

impl BiconnectivityAnalyzer {
    /// Creates an analyzer over `vertex_count` isolated vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_config(vertex_count, AnalysisConfig::default())
    }

    pub fn with_config(vertex_count: usize, config: AnalysisConfig) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
            config,
        })
    }

    /// Adds the undirected edge `u - v`. Calling this twice for the same pair
    /// adds a parallel edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] for an out-of-range endpoint and
    /// [`GraphError::SelfLoop`] when `u == v`. Nothing is added on error.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        let id = self.edge_count;
        self.adjacency[u].push((v, id));
        self.adjacency[v].push((u, id));
        self.edge_count += 1;
        Ok(())
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: usize) -> Result<Vec<usize>> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.adjacency[v].iter().map(|&(w, _)| w).collect())
    }

    /// Find articulation points and biconnected components.
    ///
    /// The search starts at `start`; every vertex still unvisited afterwards
    /// roots a further search, so disconnected graphs are fully covered. The
    /// articulation point set and the edge partition do not depend on
    /// `start`.
    ///
    /// Time complexity: O(V + E)
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `start` is out of range.
    #[instrument(
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = self.edge_count)
    )]
    pub fn find_biconnected_components(&self, start: usize) -> Result<BiconnectedResult> {
        check_vertex(start, self.vertex_count())?;

        let strategy = self.config.effective_strategy(self.vertex_count());
        let mut state = TarjanState::new(self.vertex_count());

        let order = std::iter::once(start).chain(0..self.vertex_count());
        for root in order {
            if state.visited[root] {
                continue;
            }
            state.roots.push(root);
            match strategy {
                DfsStrategy::Iterative => self.search_iterative(root, &mut state),
                DfsStrategy::Recursive => self.search_recursive(root, None, &mut state),
            }
            debug_assert!(state.edge_stack.is_empty());
        }

        debug!(
            articulation_points = state.articulation_points.len(),
            components = state.components.len(),
            trees = state.roots.len(),
            "biconnected analysis complete"
        );
        Ok(state.into_result())
    }

    /// Articulation points (cut vertices).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `start` is out of range.
    pub fn articulation_points(&self, start: usize) -> Result<BTreeSet<usize>> {
        Ok(self.find_biconnected_components(start)?.articulation_points)
    }

    /// Bridges (cut edges) as `(min, max)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] if `start` is out of range.
    pub fn bridges(&self, start: usize) -> Result<Vec<(usize, usize)>> {
        Ok(self.find_biconnected_components(start)?.bridges())
    }

    fn search_iterative(&self, root: usize, state: &mut TarjanState) {
        state.discover(root);
        let mut stack = vec![Frame::new(root, None)];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            if let Some(&(v, id)) = self.adjacency[u].get(frame.next) {
                frame.next += 1;
                if frame.parent_edge == Some(id) {
                    continue;
                }
                if state.visited[v] {
                    state.visited_edge(u, v, id);
                } else {
                    frame.children += 1;
                    state.tree_edge(u, v, id);
                    state.discover(v);
                    stack.push(Frame::new(v, Some(id)));
                }
                continue;
            }

            // All neighbors examined: return to the parent frame.
            let finished = stack.pop();
            if let (Some(child), Some(parent)) = (finished, stack.last()) {
                if let Some(id) = child.parent_edge {
                    state.finish_child(parent.vertex, child.vertex, id, parent.children);
                }
            }
        }
    }

    fn search_recursive(&self, u: usize, parent_edge: Option<usize>, state: &mut TarjanState) {
        state.discover(u);
        let mut children = 0;

        for &(v, id) in &self.adjacency[u] {
            if parent_edge == Some(id) {
                continue;
            }
            if state.visited[v] {
                state.visited_edge(u, v, id);
            } else {
                children += 1;
                state.tree_edge(u, v, id);
                self.search_recursive(v, Some(id), state);
                state.finish_child(u, v, id, children);
            }
        }
    }
}
