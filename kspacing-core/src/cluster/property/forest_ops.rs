//! Property 4: disjoint-set forest invariants under arbitrary merges.
//!
//! - merging two roots lowers `set_count` by exactly one, a same-root merge
//!   changes nothing;
//! - only the surviving root of an equal-rank merge gains rank, by one, and
//!   it is the smaller of the two roots;
//! - an unequal-rank merge keeps the higher-rank root and every rank;
//! - `find` leaves the queried node pointing straight at its root.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::DisjointSetForest;

/// Largest forest driven by the property.
const MAX_NODES: usize = 64;

/// A forest size plus a sequence of node pairs to merge.
#[derive(Clone, Debug)]
pub(super) struct MergeScript {
    pub node_count: usize,
    pub pairs: Vec<(usize, usize)>,
}

pub(super) fn merge_script_strategy() -> impl Strategy<Value = MergeScript> {
    (1..=MAX_NODES).prop_flat_map(|node_count| {
        proptest::collection::vec((0..node_count, 0..node_count), 0..=node_count * 3)
            .prop_map(move |pairs| MergeScript { node_count, pairs })
    })
}

fn ranks(forest: &DisjointSetForest) -> Vec<u8> {
    (0..forest.len()).map(|node| forest.rank(node)).collect()
}

/// Replays `script` and checks every merge against the rank rules.
pub(super) fn run_forest_merge_property(script: &MergeScript) -> TestCaseResult {
    let mut forest = DisjointSetForest::new(script.node_count);
    prop_assert_eq!(forest.set_count(), script.node_count);

    for &(left, right) in &script.pairs {
        let left_root = forest.find(left);
        let right_root = forest.find(right);
        prop_assert_eq!(forest.parent(left), left_root);
        prop_assert_eq!(forest.parent(right), right_root);

        let ranks_before = ranks(&forest);
        let sets_before = forest.set_count();
        let merged = forest.merge(left, right);
        let ranks_after = ranks(&forest);

        if left_root == right_root {
            prop_assert!(!merged, "same-root merge of ({left}, {right}) reported a union");
            prop_assert_eq!(forest.set_count(), sets_before);
            prop_assert_eq!(ranks_after, ranks_before);
            continue;
        }

        prop_assert!(merged, "merge of distinct roots ({left}, {right}) was refused");
        prop_assert_eq!(forest.set_count(), sets_before - 1);

        let root = forest.find(left);
        prop_assert_eq!(forest.find(right), root);

        let left_rank = ranks_before[left_root];
        let right_rank = ranks_before[right_root];
        let expected_root = match left_rank.cmp(&right_rank) {
            std::cmp::Ordering::Greater => left_root,
            std::cmp::Ordering::Less => right_root,
            std::cmp::Ordering::Equal => left_root.min(right_root),
        };
        prop_assert_eq!(root, expected_root);

        for (node, (&before, &after)) in ranks_before.iter().zip(&ranks_after).enumerate() {
            if node == root && left_rank == right_rank {
                prop_assert_eq!(after, before + 1, "equal-rank root {} must grow by one", node);
            } else {
                prop_assert_eq!(after, before, "rank of {} changed outside an equal-rank union", node);
            }
        }
    }
    Ok(())
}
