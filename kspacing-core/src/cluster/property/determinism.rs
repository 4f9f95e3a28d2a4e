//! Property 3: determinism and input-order independence.
//!
//! Re-running the engine on the same input must reproduce the exact result.
//! Shuffling the input order may change which equal-weight edges merge, but
//! never the spacing, the merge weights, or the cluster count.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::cluster;

use super::strategies::shuffle;
use super::types::SpacingFixture;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &SpacingFixture, seed: u64) -> TestCaseResult {
    let run = |edges: &[crate::Edge]| {
        cluster(fixture.vertex_count, edges, fixture.cluster_count)
            .map_err(|e| TestCaseError::fail(format!("cluster failed: {e} ({})", fixture.describe())))
    };

    let baseline = run(&fixture.edges)?;
    let repeat = run(&fixture.edges)?;
    if repeat != baseline {
        return Err(TestCaseError::fail(format!(
            "repeated run diverged ({})",
            fixture.describe()
        )));
    }

    let mut shuffled = fixture.edges.clone();
    shuffle(&mut shuffled, &mut SmallRng::seed_from_u64(seed));
    let reordered = run(&shuffled)?;

    let weights = |edges: &[crate::Edge]| edges.iter().map(|edge| edge.weight()).collect::<Vec<_>>();
    if weights(reordered.merged_edges()) != weights(baseline.merged_edges()) {
        return Err(TestCaseError::fail(format!(
            "merge weights depend on input order ({})",
            fixture.describe()
        )));
    }
    if reordered.max_spacing() != baseline.max_spacing()
        || reordered.cluster_count() != baseline.cluster_count()
    {
        return Err(TestCaseError::fail(format!(
            "spacing depends on input order ({})",
            fixture.describe()
        )));
    }
    Ok(())
}
