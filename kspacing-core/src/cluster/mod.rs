//! Clustering variant of Kruskal's algorithm.
//!
//! Edges are popped cheapest first. An edge whose endpoints already share a
//! root would close a cycle and is discarded; any other edge merges two
//! clusters. The walk stops as soon as the forest holds exactly `k` sets, and
//! the weight of the final merge is the reported maximum spacing.

mod forest;
mod queue;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{ClusterId, Clustering, Edge, Result, SpacingError};

pub use self::{forest::DisjointSetForest, queue::EdgeQueue};

/// Merges the vertices `1..=vertex_count` into exactly `cluster_count`
/// clusters and returns the resulting [`Clustering`].
///
/// The edges are expected to describe a complete graph; completeness is not
/// checked here, but an edge list that cannot reach `cluster_count`
/// components is reported rather than producing a partial answer.
///
/// # Errors
///
/// Returns an error when:
/// - `vertex_count == 0`
/// - `cluster_count` is outside `1..=vertex_count`
/// - an edge references a label outside `1..=vertex_count`
/// - an edge is a self-loop
/// - the edges run out before `vertex_count - cluster_count` merges
///
/// # Examples
/// ```
/// use kspacing_core::{Edge, cluster};
///
/// let edges = [
///     Edge::new(1, 2, 1, 0),
///     Edge::new(1, 3, 4, 1),
///     Edge::new(1, 4, 3, 2),
///     Edge::new(2, 3, 2, 3),
///     Edge::new(2, 4, 5, 4),
///     Edge::new(3, 4, 6, 5),
/// ];
/// let clustering = cluster(4, &edges, 2)?;
/// assert_eq!(clustering.max_spacing(), Some(2));
/// # Ok::<(), kspacing_core::SpacingError>(())
/// ```
pub fn cluster(vertex_count: usize, edges: &[Edge], cluster_count: usize) -> Result<Clustering> {
    if vertex_count == 0 {
        return Err(SpacingError::EmptyGraph);
    }
    if cluster_count == 0 || cluster_count > vertex_count {
        return Err(SpacingError::InvalidClusterCount {
            requested: cluster_count,
            vertex_count,
        });
    }
    for edge in edges {
        validate_edge(edge, vertex_count)?;
    }

    let queue: EdgeQueue = edges.iter().copied().collect();
    let mut forest = DisjointSetForest::new(vertex_count);
    contract(&mut forest, queue, cluster_count)
}

fn validate_edge(edge: &Edge, vertex_count: usize) -> Result<()> {
    for vertex in [edge.source(), edge.target()] {
        if vertex == 0 || vertex > vertex_count {
            return Err(SpacingError::InvalidVertex {
                vertex,
                vertex_count,
            });
        }
    }
    if edge.is_self_loop() {
        return Err(SpacingError::SelfLoop {
            vertex: edge.source(),
        });
    }
    Ok(())
}

/// Pops edges until `forest` holds `cluster_count` sets.
fn contract(
    forest: &mut DisjointSetForest,
    mut queue: EdgeQueue,
    cluster_count: usize,
) -> Result<Clustering> {
    let required = forest.len() - cluster_count;
    let mut merged_edges = Vec::with_capacity(required);
    let mut discarded = 0usize;

    while merged_edges.len() < required {
        let Some(edge) = queue.next() else {
            debug!(
                merges = merged_edges.len(),
                required, "edge stream exhausted before reaching cluster count"
            );
            return Err(SpacingError::InfeasibleClustering {
                merges: merged_edges.len(),
                required,
            });
        };

        if forest.merge(edge.source() - 1, edge.target() - 1) {
            trace!(
                source = edge.source(),
                target = edge.target(),
                weight = edge.weight(),
                sets = forest.set_count(),
                "merged clusters"
            );
            merged_edges.push(edge);
        } else {
            discarded += 1;
        }
    }

    record_metrics(merged_edges.len(), discarded);
    debug!(
        merges = merged_edges.len(),
        discarded,
        unexamined = queue.remaining(),
        "edge walk finished"
    );

    let assignments = assign_clusters(forest);
    Ok(Clustering::new(
        merged_edges,
        discarded,
        assignments,
        forest.set_count(),
    ))
}

/// Numbers each root in order of its first vertex so ids are contiguous.
fn assign_clusters(forest: &mut DisjointSetForest) -> Vec<ClusterId> {
    let mut ids: HashMap<usize, ClusterId> = HashMap::with_capacity(forest.set_count());
    (0..forest.len())
        .map(|node| {
            let root = forest.find(node);
            let next = ClusterId::new(ids.len() as u64);
            *ids.entry(root).or_insert(next)
        })
        .collect()
}

#[cfg(feature = "metrics")]
fn record_metrics(merged: usize, discarded: usize) {
    metrics::counter!("kspacing_edges_merged").increment(merged as u64);
    metrics::counter!("kspacing_edges_discarded").increment(discarded as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_metrics(_merged: usize, _discarded: usize) {}

#[cfg(test)]
mod property;
