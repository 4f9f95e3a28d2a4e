//! Property 2: structural invariants of every successful run.
//!
//! - exactly `n - k` merges and exactly `k` clusters;
//! - merge weights are non-decreasing and the last one is the spacing;
//! - merged edges form a forest (no merge ever closed a cycle);
//! - assignments are contiguous ids that agree with the merged edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Clustering, DisjointSetForest, cluster};

use super::types::SpacingFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &SpacingFixture) -> TestCaseResult {
    let clustering = cluster(fixture.vertex_count, &fixture.edges, fixture.cluster_count)
        .map_err(|e| TestCaseError::fail(format!("cluster failed: {e} ({})", fixture.describe())))?;

    validate_counts(fixture, &clustering)?;
    validate_monotone_weights(fixture, &clustering)?;
    validate_forest(fixture, &clustering)?;
    Ok(())
}

fn validate_counts(fixture: &SpacingFixture, clustering: &Clustering) -> TestCaseResult {
    let required = fixture.vertex_count - fixture.cluster_count;
    if clustering.merged_edges().len() != required {
        return Err(TestCaseError::fail(format!(
            "expected {required} merges, got {} ({})",
            clustering.merged_edges().len(),
            fixture.describe(),
        )));
    }
    if clustering.cluster_count() != fixture.cluster_count {
        return Err(TestCaseError::fail(format!(
            "expected {} clusters, got {} ({})",
            fixture.cluster_count,
            clustering.cluster_count(),
            fixture.describe(),
        )));
    }
    if clustering.assignments().len() != fixture.vertex_count {
        return Err(TestCaseError::fail(format!(
            "expected {} assignments, got {} ({})",
            fixture.vertex_count,
            clustering.assignments().len(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_monotone_weights(fixture: &SpacingFixture, clustering: &Clustering) -> TestCaseResult {
    let merged = clustering.merged_edges();
    if let Some(index) = merged
        .windows(2)
        .position(|pair| pair[0].weight() > pair[1].weight())
    {
        return Err(TestCaseError::fail(format!(
            "merge {} is lighter than merge {index} ({})",
            index + 1,
            fixture.describe(),
        )));
    }
    let heaviest = merged.iter().map(|edge| edge.weight()).max();
    if clustering.max_spacing() != heaviest {
        return Err(TestCaseError::fail(format!(
            "spacing {:?} is not the heaviest merge {heaviest:?} ({})",
            clustering.max_spacing(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_forest(fixture: &SpacingFixture, clustering: &Clustering) -> TestCaseResult {
    let mut replay = DisjointSetForest::new(fixture.vertex_count);
    for edge in clustering.merged_edges() {
        if !replay.merge(edge.source() - 1, edge.target() - 1) {
            return Err(TestCaseError::fail(format!(
                "merged edge ({}, {}) closes a cycle ({})",
                edge.source(),
                edge.target(),
                fixture.describe(),
            )));
        }
    }

    let assignments = clustering.assignments();
    let mut next_id = 0u64;
    for left in 0..fixture.vertex_count {
        let id = assignments[left].get();
        if id > next_id {
            return Err(TestCaseError::fail(format!(
                "cluster id {id} skips ahead of {next_id} ({})",
                fixture.describe(),
            )));
        }
        if id == next_id {
            next_id += 1;
        }
        for right in (left + 1)..fixture.vertex_count {
            let same_cluster = assignments[left] == assignments[right];
            if same_cluster != replay.same_set(left, right) {
                return Err(TestCaseError::fail(format!(
                    "vertices {} and {} disagree between assignments and merges ({})",
                    left + 1,
                    right + 1,
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}
