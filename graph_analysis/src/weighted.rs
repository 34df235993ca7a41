// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dense, label-indexed, undirected weighted graph.
//!
//! Edges live in a symmetric `vertex_count x vertex_count` weight matrix where
//! `0` means "no edge". The diagonal is always `0`. Traversal, shortest path
//! and spanning tree queries are implemented in [`crate::algorithms`].

use tracing::instrument;

use crate::{error::check_vertex, AnalysisConfig, GraphError, Result};

/// Undirected graph backed by an adjacency matrix of non-negative weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    labels: Vec<String>,
    weights: Vec<Vec<u64>>,
    config: AnalysisConfig,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero and
    /// [`GraphError::LabelCountMismatch`] when the number of labels differs
    /// from `vertex_count`.
    pub fn new<I, S>(vertex_count: usize, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(vertex_count, labels, AnalysisConfig::default())
    }

    /// Creates a graph with an explicit runtime configuration.
    ///
    /// # Errors
    ///
    /// Same as [`WeightedGraph::new`].
    pub fn with_config<I, S>(vertex_count: usize, labels: I, config: AnalysisConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != vertex_count {
            return Err(GraphError::LabelCountMismatch {
                expected: vertex_count,
                actual: labels.len(),
            });
        }

        Ok(Self {
            labels,
            weights: vec![vec![0; vertex_count]; vertex_count],
            config,
        })
    }

    /// Creates a graph labelled `0`, `1`, ... `vertex_count - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero.
    pub fn with_vertex_count(vertex_count: usize) -> Result<Self> {
        Self::new(vertex_count, (0..vertex_count).map(|i| i.to_string()))
    }

    /// Sets the weight of the undirected edge `u - v`. Repeated calls on the
    /// same pair overwrite; a weight of `0` removes the edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertex`] for an out-of-range endpoint and
    /// [`GraphError::SelfLoop`] when `u == v`. The graph is left unchanged.
    #[instrument(skip(self), level = "trace")]
    pub fn add_edge(&mut self, u: usize, v: usize, weight: u64) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        self.weights[u][v] = weight;
        self.weights[v][u] = weight;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges with a positive weight.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights
            .iter()
            .enumerate()
            .map(|(u, row)| row.iter().skip(u + 1).filter(|&&w| w > 0).count())
            .sum()
    }

    pub fn label(&self, v: usize) -> Result<&str> {
        self.check(v)?;
        Ok(&self.labels[v])
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Weight of edge `u - v`, or `None` when the vertices are not adjacent.
    pub fn weight(&self, u: usize, v: usize) -> Result<Option<u64>> {
        self.check(u)?;
        self.check(v)?;
        let w = self.weights[u][v];
        Ok((w > 0).then_some(w))
    }

    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        Ok(self.weight(u, v)?.is_some())
    }

    /// Neighbors of `u` in ascending index order.
    pub fn neighbors(&self, u: usize) -> Result<Vec<usize>> {
        self.check(u)?;
        Ok(self.neighbor_iter(u).map(|(v, _)| v).collect())
    }

    /// All edges as `(u, v, weight)` with `u < v`, in row-major order.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize, u64)> {
        let mut edges = Vec::new();
        for (u, row) in self.weights.iter().enumerate() {
            for (v, &w) in row.iter().enumerate().skip(u + 1) {
                if w > 0 {
                    edges.push((u, v, w));
                }
            }
        }
        edges
    }

    /// Raw matrix rows, `0` meaning "no edge".
    #[must_use]
    pub fn adjacency_matrix(&self) -> &[Vec<u64>] {
        &self.weights
    }

    pub(crate) fn check(&self, v: usize) -> Result<()> {
        check_vertex(v, self.vertex_count())
    }

    /// Unchecked ascending `(neighbor, weight)` scan of row `u`.
    pub(crate) fn neighbor_iter(&self, u: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.weights[u]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(v, &w)| (v, w))
    }

    pub(crate) fn raw_weight(&self, u: usize, v: usize) -> u64 {
        self.weights[u][v]
    }
}
