// SPDX-License-Identifier: MIT OR Apache-2.0
//! Breadth-first and depth-first traversal over a `WeightedGraph`.
//!
//! Both traversals scan neighbors in ascending vertex index order and return
//! the vertices in the order they were first reached. Vertices unreachable
//! from the start are simply absent from the result.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{DfsStrategy, Result, WeightedGraph};

impl WeightedGraph {
    /// Breadth-first traversal from `start`.
    ///
    /// Time complexity: O(V²)
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidVertex` if `start` is out of range.
    #[instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>> {
        self.check(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            order.push(u);
            for (v, _) in self.neighbor_iter(u) {
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }

        debug!(visited = order.len(), "bfs complete");
        Ok(order)
    }

    /// Depth-first pre-order traversal from `start`.
    ///
    /// Uses the configured [`DfsStrategy`]; both strategies produce the same
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidVertex` if `start` is out of range.
    #[instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn dfs(&self, start: usize) -> Result<Vec<usize>> {
        self.check(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();

        match self.config().effective_strategy(self.vertex_count()) {
            DfsStrategy::Iterative => self.dfs_iterative(start, &mut visited, &mut order),
            DfsStrategy::Recursive => self.dfs_recursive(start, &mut visited, &mut order),
        }

        debug!(visited = order.len(), "dfs complete");
        Ok(order)
    }

    /// Whether every vertex is reachable from vertex 0.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.bfs(0)
            .map(|order| order.len() == self.vertex_count())
            .unwrap_or(false)
    }

    /// Explicit-stack DFS. Each frame keeps the next matrix column to scan so
    /// resuming a frame continues exactly where the simulated call left off.
    fn dfs_iterative(&self, start: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        let n = self.vertex_count();
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        visited[start] = true;
        order.push(start);

        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            let next = (frame.1..n).find(|&v| self.raw_weight(u, v) > 0 && !visited[v]);
            match next {
                Some(v) => {
                    frame.1 = v + 1;
                    visited[v] = true;
                    order.push(v);
                    stack.push((v, 0));
                },
                None => {
                    stack.pop();
                },
            }
        }
    }

    fn dfs_recursive(&self, u: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[u] = true;
        order.push(u);
        for v in 0..self.vertex_count() {
            if self.raw_weight(u, v) > 0 && !visited[v] {
                self.dfs_recursive(v, visited, order);
            }
        }
    }
}
