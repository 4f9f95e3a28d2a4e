//! Builder for configuring [`KSpacing`] runs.

use std::num::NonZeroUsize;

use crate::{Result, error::SpacingError, runner::KSpacing};

/// Cluster count used when none is configured.
pub const DEFAULT_CLUSTER_COUNT: usize = 4;

/// Configures and constructs [`KSpacing`] instances.
///
/// # Examples
/// ```
/// use kspacing_core::KSpacingBuilder;
///
/// let spacing = KSpacingBuilder::new()
///     .with_cluster_count(3)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(spacing.cluster_count().get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct KSpacingBuilder {
    cluster_count: usize,
}

impl Default for KSpacingBuilder {
    fn default() -> Self {
        Self {
            cluster_count: DEFAULT_CLUSTER_COUNT,
        }
    }
}

impl KSpacingBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kspacing_core::{DEFAULT_CLUSTER_COUNT, KSpacingBuilder};
    ///
    /// let builder = KSpacingBuilder::new();
    /// assert_eq!(builder.cluster_count(), DEFAULT_CLUSTER_COUNT);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of clusters to stop at.
    #[must_use]
    pub fn with_cluster_count(mut self, cluster_count: usize) -> Self {
        self.cluster_count = cluster_count;
        self
    }

    /// Returns the configured cluster count.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Validates the configuration and constructs a [`KSpacing`] instance.
    ///
    /// The upper bound on the cluster count depends on the graph and is
    /// checked when [`KSpacing::run`] is called.
    ///
    /// # Errors
    /// Returns [`SpacingError::ZeroClusterCount`] when the cluster count is 0.
    ///
    /// # Examples
    /// ```
    /// use kspacing_core::{KSpacingBuilder, SpacingError};
    ///
    /// let err = KSpacingBuilder::new().with_cluster_count(0).build().unwrap_err();
    /// assert_eq!(err, SpacingError::ZeroClusterCount);
    /// ```
    pub fn build(self) -> Result<KSpacing> {
        let cluster_count =
            NonZeroUsize::new(self.cluster_count).ok_or(SpacingError::ZeroClusterCount)?;
        Ok(KSpacing::new(cluster_count))
    }
}
