// SPDX-License-Identifier: MIT OR Apache-2.0
// Pedantic lint configuration for graph_analysis
#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::module_name_repetitions)]

//! Graph analysis over fixed, pre-built undirected graphs.
//!
//! Two independent components:
//!
//! - [`WeightedGraph`]: dense, label-indexed graph with a symmetric weight
//!   matrix. Answers BFS, DFS, Dijkstra and minimum spanning tree queries.
//! - [`BiconnectivityAnalyzer`]: sparse adjacency-list graph. Finds
//!   articulation points and the partition of edges into biconnected
//!   components.
//!
//! Both are built once through `add_edge` and queried read-only afterward.
//!
//! ```
//! use graph_analysis::{BiconnectivityAnalyzer, WeightedGraph};
//!
//! let mut g = WeightedGraph::new(3, ["A", "B", "C"])?;
//! g.add_edge(0, 1, 4)?;
//! g.add_edge(1, 2, 1)?;
//! assert_eq!(g.dijkstra(0)?.distance(2)?, Some(5));
//!
//! let mut bc = BiconnectivityAnalyzer::new(3)?;
//! bc.add_edge(0, 1)?;
//! bc.add_edge(1, 2)?;
//! assert!(bc.articulation_points(0)?.contains(&1));
//! # Ok::<(), graph_analysis::GraphError>(())
//! ```

pub mod algorithms;
mod biconnected;
mod config;
mod error;
mod weighted;

pub use algorithms::{MstEdge, MstResult, ShortestPaths};
pub use biconnected::{BiconnectedComponent, BiconnectedResult, BiconnectivityAnalyzer};
pub use config::{AnalysisConfig, DfsStrategy};
pub use error::{GraphError, Result};
pub use weighted::WeightedGraph;

#[cfg(test)]
mod tests;
