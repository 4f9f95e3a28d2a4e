//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use crate::source::SyntheticError;
use kspacing_core::SpacingError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Configuring or running the clustering failed.
    #[error("clustering failed: {0}")]
    Spacing(#[from] SpacingError),
}
