//! Runtime entry point tying an [`EdgeSource`] to the clustering engine.

use std::num::NonZeroUsize;

use tracing::{info, instrument, warn};

use crate::{Clustering, EdgeSource, Result, SpacingError, cluster};

/// Entry point for computing the maximum spacing of a k-clustering.
///
/// # Examples
/// ```
/// use kspacing_core::{EdgeList, KSpacingBuilder};
///
/// let graph = EdgeList::from_triples(
///     "square",
///     4,
///     [(1, 2, 1), (1, 3, 4), (1, 4, 3), (2, 3, 2), (2, 4, 5), (3, 4, 6)],
/// );
/// let spacing = KSpacingBuilder::new()
///     .with_cluster_count(2)
///     .build()
///     .expect("builder must succeed");
/// let clustering = spacing.run(&graph).expect("run must succeed");
/// assert_eq!(clustering.max_spacing(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct KSpacing {
    cluster_count: NonZeroUsize,
}

impl KSpacing {
    pub(crate) fn new(cluster_count: NonZeroUsize) -> Self {
        Self { cluster_count }
    }

    /// Returns the number of clusters each run stops at.
    #[must_use]
    pub fn cluster_count(&self) -> NonZeroUsize {
        self.cluster_count
    }

    /// Clusters the graph described by `source`.
    ///
    /// # Errors
    /// Returns [`SpacingError::EmptyGraph`] when the source has no vertices,
    /// [`SpacingError::InvalidClusterCount`] when it has fewer vertices than
    /// the configured cluster count, and the validation or
    /// [`SpacingError::InfeasibleClustering`] errors of [`cluster`].
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            data_source = source.name(),
            vertices = source.vertex_count(),
            edges = source.edges().len(),
            clusters = self.cluster_count.get(),
        ),
    )]
    pub fn run<S: EdgeSource>(&self, source: &S) -> Result<Clustering> {
        let vertex_count = source.vertex_count();
        if vertex_count == 0 {
            warn!(
                data_source = source.name(),
                "edge source is empty, returning error"
            );
            return Err(SpacingError::EmptyGraph);
        }

        let clustering = cluster(vertex_count, source.edges(), self.cluster_count.get())?;
        match clustering.max_spacing() {
            Some(spacing) => info!(
                max_spacing = spacing,
                merges = clustering.merged_edges().len(),
                "clustering completed"
            ),
            None => info!("every vertex is its own cluster; no merge performed"),
        }
        Ok(clustering)
    }
}
