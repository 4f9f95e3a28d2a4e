//! Result types for k-clustering runs.

use crate::Edge;

/// Outcome of a successful [`crate::cluster`] invocation.
///
/// # Examples
/// ```
/// use kspacing_core::{Edge, cluster};
///
/// let edges = [Edge::new(1, 2, 3, 0), Edge::new(1, 3, 8, 1), Edge::new(2, 3, 5, 2)];
/// let clustering = cluster(3, &edges, 2)?;
/// assert_eq!(clustering.max_spacing(), Some(3));
/// assert_eq!(clustering.cluster_count(), 2);
/// # Ok::<(), kspacing_core::SpacingError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clustering {
    merged_edges: Vec<Edge>,
    discarded_edges: usize,
    assignments: Vec<ClusterId>,
    cluster_count: usize,
}

impl Clustering {
    pub(crate) fn new(
        merged_edges: Vec<Edge>,
        discarded_edges: usize,
        assignments: Vec<ClusterId>,
        cluster_count: usize,
    ) -> Self {
        Self {
            merged_edges,
            discarded_edges,
            assignments,
            cluster_count,
        }
    }

    /// Returns the weight of the last edge that merged two clusters.
    ///
    /// `None` means no merge was needed because every vertex already forms
    /// its own cluster (`k == n`).
    #[must_use]
    pub fn max_spacing(&self) -> Option<u64> {
        self.merged_edges.last().map(Edge::weight)
    }

    /// Returns the merging edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn merged_edges(&self) -> &[Edge] { &self.merged_edges }

    /// Returns how many popped edges were discarded because both endpoints
    /// were already in the same cluster.
    #[must_use]
    #[rustfmt::skip]
    pub fn discarded_edges(&self) -> usize { self.discarded_edges }

    /// Returns the cluster of every vertex; index `i` holds label `i + 1`.
    #[must_use]
    #[rustfmt::skip]
    pub fn assignments(&self) -> &[ClusterId] { &self.assignments }

    /// Returns the number of clusters.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns the cluster holding vertex `label`, if the label exists.
    #[must_use]
    pub fn cluster_of(&self, label: usize) -> Option<ClusterId> {
        label
            .checked_sub(1)
            .and_then(|index| self.assignments.get(index))
            .copied()
    }
}

/// Identifier for a cluster. Ids are contiguous from zero and numbered in
/// the order their first vertex label appears.
///
/// # Examples
/// ```
/// use kspacing_core::ClusterId;
///
/// let id = ClusterId::new(7);
/// assert_eq!(id.get(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new [`ClusterId`].
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}
