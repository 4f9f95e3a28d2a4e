//! Property 1: the engine agrees with the Prim oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::cluster;

use super::oracle::expected_spacing;
use super::types::SpacingFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &SpacingFixture) -> TestCaseResult {
    let clustering = cluster(fixture.vertex_count, &fixture.edges, fixture.cluster_count)
        .map_err(|e| TestCaseError::fail(format!("cluster failed: {e} ({})", fixture.describe())))?;

    let expected = expected_spacing(fixture.vertex_count, &fixture.edges, fixture.cluster_count);
    if clustering.max_spacing() != expected {
        return Err(TestCaseError::fail(format!(
            "max spacing mismatch: engine={:?}, oracle={expected:?} ({})",
            clustering.max_spacing(),
            fixture.describe(),
        )));
    }
    Ok(())
}
