//! kspacing core library.
//!
//! Computes the maximum spacing of a k-clustering of a complete weighted graph
//! with the clustering variant of Kruskal's algorithm. Edges are popped in
//! ascending order and contracted through a [`DisjointSetForest`] until exactly
//! `k` components remain.
//!
//! # Tie-breaking
//!
//! Equal-weight edges are ordered by their canonical endpoint labels
//! (`source <= target`) and then by input position, so repeated runs over the
//! same input always merge the same edges.
//!
//! When the `metrics` feature is enabled the engine emits:
//!
//! - `kspacing_edges_merged` (counter)
//! - `kspacing_edges_discarded` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod cluster;
mod edge;
mod error;
mod result;
mod runner;
mod source;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_CLUSTER_COUNT, KSpacingBuilder},
    cluster::{DisjointSetForest, EdgeQueue, cluster},
    edge::Edge,
    error::{Result, SpacingError, SpacingErrorCode},
    result::{ClusterId, Clustering},
    runner::KSpacing,
    source::{EdgeList, EdgeSource, complete_edge_count},
};
