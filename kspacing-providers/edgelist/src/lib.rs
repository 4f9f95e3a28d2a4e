//! Edge-list provider for complete weighted graphs stored as text.
//!
//! The first line holds the vertex count; every following non-blank line
//! holds one edge as `source dest weight` with 1-based labels and a
//! non-negative integer weight.

mod errors;
mod parse;
mod provider;

pub use errors::{EdgeListError, Field};
pub use provider::EdgeListProvider;
