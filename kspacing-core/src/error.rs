//! Error types for the kspacing core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running a k-clustering.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SpacingError {
    /// The graph has no vertices.
    #[error("cannot cluster an empty graph")]
    EmptyGraph,
    /// The builder was asked for zero clusters.
    #[error("cluster count must be at least 1 (got 0)")]
    ZeroClusterCount,
    /// The requested cluster count is outside `1..=vertex_count`.
    #[error("cluster count {requested} is outside 1..={vertex_count}")]
    InvalidClusterCount {
        /// Cluster count supplied by the caller.
        requested: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge referenced a label that is not in `1..=vertex_count`.
    #[error("edge references vertex {vertex}, but labels run from 1 to {vertex_count}")]
    InvalidVertex {
        /// The offending vertex label.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// Label of the vertex on both ends of the edge.
        vertex: usize,
    },
    /// The edge stream ran out before the forest shrank to the requested
    /// number of clusters, so the input graph cannot have been complete.
    #[error("edges exhausted after {merges} of {required} required merges")]
    InfeasibleClustering {
        /// Merges performed before the stream ran dry.
        merges: usize,
        /// Merges needed to reach the requested cluster count.
        required: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SpacingError`] variants.
    enum SpacingErrorCode for SpacingError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "SPACING_EMPTY_GRAPH",
        /// The builder was asked for zero clusters.
        ZeroClusterCount => ZeroClusterCount => "SPACING_ZERO_CLUSTER_COUNT",
        /// The requested cluster count is outside `1..=vertex_count`.
        InvalidClusterCount => InvalidClusterCount { .. } => "SPACING_INVALID_CLUSTER_COUNT",
        /// An edge referenced an unknown vertex label.
        InvalidVertex => InvalidVertex { .. } => "SPACING_INVALID_VERTEX",
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "SPACING_SELF_LOOP",
        /// The edge stream ran out before reaching the requested cluster count.
        InfeasibleClustering => InfeasibleClustering { .. } => "SPACING_INFEASIBLE_CLUSTERING",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SpacingError>;
