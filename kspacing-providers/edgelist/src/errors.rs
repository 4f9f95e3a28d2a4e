use std::fmt;

use thiserror::Error;

/// Column of the edge-list format a parse error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    /// The vertex count on the header line.
    VertexCount,
    /// First endpoint of an edge.
    Source,
    /// Second endpoint of an edge.
    Destination,
    /// Edge cost.
    Weight,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VertexCount => "vertex count",
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Weight => "weight",
        })
    }
}

/// Errors raised while loading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The input held no non-blank lines.
    #[error("edge list is empty")]
    EmptyInput,
    /// The header declared zero vertices.
    #[error("edge list declares no vertices")]
    NoVertices,
    /// A line ended before all of its fields were read.
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: Field },
    /// A field was not a non-negative integer.
    #[error("line {line}: invalid {field} `{raw}`")]
    InvalidNumber {
        line: usize,
        field: Field,
        raw: String,
    },
    /// An edge endpoint fell outside `1..=vertex_count`.
    #[error("line {line}: vertex {vertex} is outside 1..={vertex_count}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("line {line}: self-loop on vertex {vertex}")]
    SelfLoop { line: usize, vertex: usize },
    /// The same unordered pair appeared twice.
    #[error("line {line}: duplicate edge ({source_vertex}, {target_vertex})")]
    DuplicateEdge {
        line: usize,
        source_vertex: usize,
        target_vertex: usize,
    },
    /// The number of edges did not match a complete graph.
    #[error("expected {expected} edges for a complete graph, found {actual}")]
    EdgeCountMismatch { expected: usize, actual: usize },
    /// The complete edge count for the declared vertices overflows `usize`.
    #[error("a complete graph on {vertex_count} vertices exceeds capacity limits")]
    CapacityOverflow { vertex_count: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
