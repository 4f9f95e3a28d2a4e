//! Synthetic complete graphs for benchmarking.
//!
//! Provides [`SyntheticGraph`], an [`EdgeSource`] over a complete graph with
//! uniformly random integer weights. Graphs are seeded so benchmark runs are
//! reproducible.

use kspacing_core::{Edge, EdgeList, EdgeSource, complete_edge_count};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The complete graph on the requested vertices has too many edges.
    #[error("a complete graph on {vertex_count} vertices exceeds capacity limits")]
    CapacityOverflow {
        /// Requested number of vertices.
        vertex_count: usize,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices, labelled `1..=vertex_count`.
    pub vertex_count: usize,
    /// Largest weight drawn; weights are uniform over `0..=max_weight`.
    pub max_weight: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A complete weighted graph generated from a seeded RNG.
///
/// # Examples
///
/// ```
/// use kspacing_benches::source::{SyntheticConfig, SyntheticGraph};
/// use kspacing_core::EdgeSource;
///
/// let config = SyntheticConfig { vertex_count: 10, max_weight: 100, seed: 42 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.edges().len(), 45);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    inner: EdgeList,
}

impl SyntheticGraph {
    /// Generates every edge of the complete graph eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero, or
    /// [`SyntheticError::CapacityOverflow`] if the edge count overflows.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        let vertex_count = config.vertex_count;
        if vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        let edge_count = complete_edge_count(vertex_count)
            .ok_or(SyntheticError::CapacityOverflow { vertex_count })?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut triples = Vec::with_capacity(edge_count);
        for source in 1..=vertex_count {
            for target in source.saturating_add(1)..=vertex_count {
                triples.push((source, target, rng.gen_range(0..=config.max_weight)));
            }
        }
        let name = format!("synthetic-{vertex_count}");
        Ok(Self {
            inner: EdgeList::from_triples(name, vertex_count, triples),
        })
    }
}

impl EdgeSource for SyntheticGraph {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edges(&self) -> &[Edge] {
        self.inner.edges()
    }
}

/// Draws `pair_count` random node pairs over `0..node_count` for driving a
/// disjoint-set forest directly.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `node_count` is zero.
///
/// # Examples
///
/// ```
/// use kspacing_benches::source::random_pairs;
///
/// let pairs = random_pairs(8, 20, 7).expect("valid config");
/// assert_eq!(pairs.len(), 20);
/// assert!(pairs.iter().all(|&(a, b)| a < 8 && b < 8));
/// ```
pub fn random_pairs(
    node_count: usize,
    pair_count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, SyntheticError> {
    if node_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..pair_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect())
}
