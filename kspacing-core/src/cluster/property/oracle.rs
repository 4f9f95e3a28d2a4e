//! Prim's algorithm as an independent oracle for the maximum spacing.
//!
//! Every minimum spanning tree of a graph has the same multiset of edge
//! weights, and stopping Kruskal after `n - k` merges accepts the `n - k`
//! smallest of them. The spacing is therefore the `(n - k)`-th smallest MST
//! weight, which Prim's algorithm computes without a disjoint-set forest or
//! a priority queue over edges.

use crate::Edge;

/// Returns the expected max spacing, or `None` when `k == n`.
///
/// Assumes `edges` describes a complete graph on `1..=vertex_count`.
pub(super) fn expected_spacing(
    vertex_count: usize,
    edges: &[Edge],
    cluster_count: usize,
) -> Option<u64> {
    let merges = vertex_count - cluster_count;
    if merges == 0 {
        return None;
    }
    let mut weights = prim_tree_weights(vertex_count, edges);
    weights.sort_unstable();
    weights.get(merges - 1).copied()
}

/// Returns the weights of a minimum spanning tree in discovery order.
pub(super) fn prim_tree_weights(vertex_count: usize, edges: &[Edge]) -> Vec<u64> {
    let mut matrix = vec![vec![u64::MAX; vertex_count]; vertex_count];
    for edge in edges {
        let (left, right) = (edge.source() - 1, edge.target() - 1);
        matrix[left][right] = matrix[left][right].min(edge.weight());
        matrix[right][left] = matrix[left][right];
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best = vec![u64::MAX; vertex_count];
    let mut weights = Vec::with_capacity(vertex_count.saturating_sub(1));
    if vertex_count == 0 {
        return weights;
    }
    best[0] = 0;

    for step in 0..vertex_count {
        let next = (0..vertex_count)
            .filter(|&node| !in_tree[node])
            .min_by_key(|&node| best[node])
            .expect("an unvisited vertex remains on every step");
        in_tree[next] = true;
        if step > 0 {
            weights.push(best[next]);
        }
        for node in 0..vertex_count {
            if !in_tree[node] {
                best[node] = best[node].min(matrix[next][node]);
            }
        }
    }
    weights
}
