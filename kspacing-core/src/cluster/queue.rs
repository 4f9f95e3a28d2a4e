//! One-pass ascending edge stream.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::Edge;

/// Min-priority queue yielding edges cheapest first.
///
/// The queue is consumed as it is iterated and cannot be restarted. Edges
/// left behind when iteration stops are dropped with the queue.
///
/// # Examples
/// ```
/// use kspacing_core::{Edge, EdgeQueue};
///
/// let queue: EdgeQueue = [Edge::new(1, 2, 9, 0), Edge::new(2, 3, 4, 1)]
///     .into_iter()
///     .collect();
/// let weights: Vec<u64> = queue.map(|edge| edge.weight()).collect();
/// assert_eq!(weights, vec![4, 9]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EdgeQueue {
    heap: BinaryHeap<Reverse<Edge>>,
}

impl EdgeQueue {
    /// Returns the number of edges not yet popped.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.heap.len()
    }

    /// Returns the next edge without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Edge> {
        self.heap.peek().map(|Reverse(edge)| edge)
    }
}

impl FromIterator<Edge> for EdgeQueue {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().map(Reverse).collect(),
        }
    }
}

impl Iterator for EdgeQueue {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop().map(|Reverse(edge)| edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for EdgeQueue {}
