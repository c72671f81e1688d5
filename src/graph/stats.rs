//! Degree statistics for a graph.

use serde::{Deserialize, Serialize};

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Whether edges are directed.
    pub directed: bool,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree.
    pub average_degree: f64,
}

impl GraphStatistics {
    pub(crate) fn from_degrees(directed: bool, edge_count: usize, mut degrees: Vec<usize>) -> Self {
        degrees.sort_unstable();
        let vertex_count = degrees.len();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };
        let total: usize = degrees.iter().sum();

        Self {
            directed,
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if vertex_count == 0 {
                0.0
            } else {
                total as f64 / vertex_count as f64
            },
        }
    }
}
