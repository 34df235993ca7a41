// SPDX-License-Identifier: MIT OR Apache-2.0
//! Single-source shortest paths using the dense O(V²) form of Dijkstra's
//! algorithm.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{error::check_vertex, Result, WeightedGraph};

/// Distances and predecessors from one source vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    source: usize,
    /// `None` marks a vertex unreachable from the source.
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Distance to `v`, `None` when unreachable.
    pub fn distance(&self, v: usize) -> Result<Option<u64>> {
        check_vertex(v, self.distances.len())?;
        Ok(self.distances[v])
    }

    /// Distance to every vertex, indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    pub fn is_reachable(&self, v: usize) -> Result<bool> {
        Ok(self.distance(v)?.is_some())
    }

    /// Vertices on a shortest path from the source to `v`, both ends
    /// included. `None` when `v` is unreachable.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.is_reachable(v)? {
            return Ok(None);
        }

        let mut path = vec![v];
        let mut current = v;
        while let Some(p) = self.predecessors[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Number of vertices reachable from the source, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

impl WeightedGraph {
    /// Shortest distance from `start` to every vertex.
    ///
    /// Each round selects the unvisited vertex with the smallest tentative
    /// distance, scanning indices in ascending order so ties go to the lower
    /// index, then relaxes its positive-weight edges.
    ///
    /// Distances are exact `u64` sums. A path whose length would exceed
    /// `u64::MAX` is never used for relaxation, so a vertex reachable only
    /// through such paths reports `None`.
    ///
    /// Time complexity: O(V²)
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidVertex` if `start` is out of range.
    #[instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn dijkstra(&self, start: usize) -> Result<ShortestPaths> {
        self.check(start)?;

        let n = self.vertex_count();
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[start] = Some(0);

        for _ in 0..n {
            let Some((u, dist_u)) = Self::closest_unvisited(&distances, &visited) else {
                // Everything left is unreachable.
                break;
            };
            visited[u] = true;

            for (v, w) in self.neighbor_iter(u) {
                if visited[v] {
                    continue;
                }
                let Some(candidate) = dist_u.checked_add(w) else {
                    warn!(from = u, to = v, "path length overflows u64, edge not relaxed");
                    continue;
                };
                if distances[v].map_or(true, |d| candidate < d) {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                }
            }
        }

        let paths = ShortestPaths {
            source: start,
            distances,
            predecessors,
        };
        debug!(reachable = paths.reachable_count(), "dijkstra complete");
        Ok(paths)
    }

    fn closest_unvisited(distances: &[Option<u64>], visited: &[bool]) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (i, d) in distances.iter().enumerate() {
            if visited[i] {
                continue;
            }
            if let Some(d) = *d {
                if best.map_or(true, |(_, b)| d < b) {
                    best = Some((i, d));
                }
            }
        }
        best
    }
}
