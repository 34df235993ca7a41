// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration for graph analysis.

/// How depth-first searches walk the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsStrategy {
    /// Explicit stack with a continuation index per frame.
    #[default]
    Iterative,
    /// Native call recursion, bounded by `max_recursion_depth`.
    Recursive,
}

/// Configuration for `WeightedGraph` and `BiconnectivityAnalyzer` runtime behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Strategy used by depth-first algorithms.
    pub dfs_strategy: DfsStrategy,
    /// Largest vertex count a recursive search is allowed to run on.
    /// Larger graphs fall back to the explicit stack.
    pub max_recursion_depth: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dfs_strategy: DfsStrategy::Iterative,
            max_recursion_depth: 10_000,
        }
    }
}

impl AnalysisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn dfs_strategy(mut self, strategy: DfsStrategy) -> Self {
        self.dfs_strategy = strategy;
        self
    }

    #[must_use]
    pub const fn recursive(self) -> Self {
        self.dfs_strategy(DfsStrategy::Recursive)
    }

    #[must_use]
    pub const fn max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Resolves the strategy to use for a graph with `vertex_count` vertices.
    #[must_use]
    pub fn effective_strategy(&self, vertex_count: usize) -> DfsStrategy {
        match self.dfs_strategy {
            DfsStrategy::Recursive if vertex_count > self.max_recursion_depth => {
                tracing::warn!(
                    vertex_count,
                    max_recursion_depth = self.max_recursion_depth,
                    "graph too deep for recursive search, using explicit stack"
                );
                DfsStrategy::Iterative
            },
            strategy => strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_iterative() {
        let config = AnalysisConfig::default();
        assert_eq!(config.dfs_strategy, DfsStrategy::Iterative);
        assert_eq!(config.max_recursion_depth, 10_000);
    }

    #[test]
    fn builder_sets_fields() {
        let config = AnalysisConfig::new().recursive().max_recursion_depth(8);
        assert_eq!(config.dfs_strategy, DfsStrategy::Recursive);
        assert_eq!(config.max_recursion_depth, 8);
    }

    #[test]
    fn recursive_falls_back_on_large_graphs() {
        let config = AnalysisConfig::new().recursive().max_recursion_depth(8);
        assert_eq!(config.effective_strategy(8), DfsStrategy::Recursive);
        assert_eq!(config.effective_strategy(9), DfsStrategy::Iterative);
    }

    #[test]
    fn iterative_never_changes() {
        let config = AnalysisConfig::new().max_recursion_depth(0);
        assert_eq!(config.effective_strategy(1_000), DfsStrategy::Iterative);
    }
}
