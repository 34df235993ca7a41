// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for graph construction and queries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphError {
    /// A vertex index outside `[0, vertex_count)` was passed to an API.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// A graph was constructed with zero vertices.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// The label list does not match the vertex count.
    #[error("expected {expected} labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },

    /// An edge from a vertex to itself was requested.
    #[error("self loop on vertex {0} is not allowed")]
    SelfLoop(usize),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Fails with [`GraphError::InvalidVertex`] unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::InvalidVertex {
            vertex,
            vertex_count,
        })
    }
}
