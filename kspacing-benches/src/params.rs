//! Benchmark parameter types.

use std::fmt;

/// Parameters for a clustering benchmark run.
#[derive(Clone, Debug)]
pub struct ClusterBenchParams {
    /// Number of vertices in the complete graph.
    pub vertex_count: usize,
    /// Number of clusters the run stops at.
    pub cluster_count: usize,
}

impl fmt::Display for ClusterBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.vertex_count, self.cluster_count)
    }
}

/// Parameters for a disjoint-set forest benchmark run.
#[derive(Clone, Debug)]
pub struct ForestBenchParams {
    /// Number of singleton sets the forest starts with.
    pub node_count: usize,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}
