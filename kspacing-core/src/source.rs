//! Edge sources consumed by [`crate::KSpacing`].

use crate::Edge;

/// A loaded graph: its vertex count and weighted edges.
///
/// Loaders implement this trait so the runner can cluster any input without
/// knowing where it came from.
pub trait EdgeSource {
    /// Returns a human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Returns the number of vertices, labelled `1..=vertex_count`.
    fn vertex_count(&self) -> usize;

    /// Returns every edge of the graph.
    fn edges(&self) -> &[Edge];
}

/// In-memory [`EdgeSource`].
///
/// # Examples
/// ```
/// use kspacing_core::{EdgeList, EdgeSource};
///
/// let list = EdgeList::from_triples("demo", 3, [(1, 2, 4), (1, 3, 2), (2, 3, 9)]);
/// assert_eq!(list.vertex_count(), 3);
/// assert_eq!(list.edges()[1].sequence(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList {
    name: String,
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Wraps already-built edges.
    #[must_use]
    pub fn new(name: impl Into<String>, vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            edges,
        }
    }

    /// Builds edges from `(source, target, weight)` triples, numbering them
    /// in iteration order.
    #[must_use]
    pub fn from_triples(
        name: impl Into<String>,
        vertex_count: usize,
        triples: impl IntoIterator<Item = (usize, usize, u64)>,
    ) -> Self {
        let edges = triples
            .into_iter()
            .zip(0u64..)
            .map(|((source, target, weight), sequence)| {
                Edge::new(source, target, weight, sequence)
            })
            .collect();
        Self::new(name, vertex_count, edges)
    }
}

impl EdgeSource for EdgeList {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Returns the number of edges in a complete graph on `vertex_count`
/// vertices, `n(n-1)/2`, or `None` if it does not fit in `usize`.
///
/// # Examples
/// ```
/// use kspacing_core::complete_edge_count;
///
/// assert_eq!(complete_edge_count(4), Some(6));
/// assert_eq!(complete_edge_count(1), Some(0));
/// assert_eq!(complete_edge_count(0), Some(0));
/// ```
#[must_use]
pub fn complete_edge_count(vertex_count: usize) -> Option<usize> {
    if vertex_count % 2 == 0 {
        (vertex_count / 2).checked_mul(vertex_count.saturating_sub(1))
    } else {
        vertex_count.checked_mul((vertex_count - 1) / 2)
    }
}
