//! Complete-graph generators for clustering property tests.
//!
//! Each fixture is built from a seeded [`SmallRng`] so that failures shrink
//! to a reproducible `(profile, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{SpacingFixture, WeightProfile};

/// Largest generated vertex count; a complete graph on 28 vertices has 378
/// edges.
const MAX_VERTICES: usize = 28;

/// Generates fixtures across every weight profile.
pub(super) fn spacing_fixture_strategy() -> impl Strategy<Value = SpacingFixture> {
    (any::<WeightProfile>(), any::<u64>()).prop_map(|(profile, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(profile, &mut rng)
    })
}

/// Generates a fixture for an explicit profile.
pub(super) fn generate_fixture(profile: WeightProfile, rng: &mut SmallRng) -> SpacingFixture {
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let cluster_count = rng.gen_range(1..=vertex_count);
    let mut weights = weight_sampler(profile, rng);

    let mut pairs = all_pairs(vertex_count);
    shuffle(&mut pairs, rng);
    let edges = pairs
        .into_iter()
        .zip(0u64..)
        .map(|((source, target), sequence)| {
            let (left, right) = if rng.gen_bool(0.5) {
                (source, target)
            } else {
                (target, source)
            };
            Edge::new(left, right, weights(rng), sequence)
        })
        .collect();

    SpacingFixture {
        vertex_count,
        cluster_count,
        edges,
        profile,
    }
}

fn weight_sampler(profile: WeightProfile, rng: &mut SmallRng) -> Box<dyn FnMut(&mut SmallRng) -> u64> {
    match profile {
        WeightProfile::Distinct => {
            let mut next = 0u64;
            Box::new(move |r| {
                next += r.gen_range(1..=5);
                next
            })
        }
        WeightProfile::FewDistinct => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<u64> = (0..pool_size).map(|_| rng.gen_range(0..=10)).collect();
            Box::new(move |r| pool[r.gen_range(0..pool.len())])
        }
        WeightProfile::SmallRange => Box::new(|r| r.gen_range(0..=20)),
        WeightProfile::Wide => Box::new(|r| r.gen_range(0..=u64::MAX / 2)),
    }
}

/// Returns every unordered pair of labels in `1..=vertex_count`.
fn all_pairs(vertex_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for source in 1..=vertex_count {
        for target in (source + 1)..=vertex_count {
            pairs.push((source, target));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
pub(super) fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
