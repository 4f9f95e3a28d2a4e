//! Weighted undirected edges and their total order.

use std::cmp::Ordering;

/// A weighted edge in canonical undirected form (`source <= target`).
///
/// Vertex labels are 1-based. `sequence` records the edge's position in the
/// input and only matters when two edges share both weight and endpoints.
///
/// # Examples
/// ```
/// use kspacing_core::Edge;
///
/// let edge = Edge::new(3, 1, 7, 0);
/// assert_eq!((edge.source(), edge.target()), (1, 3));
/// assert_eq!(edge.weight(), 7);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: u64,
    sequence: u64,
}

impl Edge {
    /// Creates an edge, swapping the endpoints if needed so that
    /// `source <= target`.
    #[must_use]
    pub fn new(left: usize, right: usize, weight: u64, sequence: u64) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
            sequence,
        }
    }

    /// Returns the smaller endpoint label.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint label.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge cost.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u64 { self.weight }

    /// Returns the input position used as the final tie-break.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
