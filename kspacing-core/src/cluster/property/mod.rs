//! Property-based tests for the clustering engine.
//!
//! Checks the engine against an independent Prim oracle, validates the
//! structural invariants of every run (merge count, set count, monotone
//! merge weights, acyclicity), confirms that results do not depend on the
//! order in which edges are supplied, and replays random merge sequences on
//! a bare [`crate::DisjointSetForest`] to check its rank and set-count rules.

mod determinism;
mod equivalence;
mod forest_ops;
mod oracle;
mod strategies;
mod structural;
