// SPDX-License-Identifier: MIT OR Apache-2.0
//! Queries over a [`WeightedGraph`](crate::WeightedGraph):
//! - Breadth-first and depth-first traversal
//! - Single-source shortest paths (dense Dijkstra)
//! - Minimum spanning tree (Prim) and spanning forest (Kruskal)

mod mst;
mod shortest_path;
mod traversal;

pub use mst::{MstEdge, MstResult};
pub use shortest_path::ShortestPaths;
