//! Benchmark support crate for kspacing.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the clustering engine and the disjoint-set forest.

pub mod error;
pub mod params;
pub mod source;
