//! Line-level parsing for the edge-list format.

use std::str::SplitWhitespace;

use crate::errors::{EdgeListError, Field};

/// Parses the header line into a vertex count.
pub(crate) fn vertex_count(line_no: usize, line: &str) -> Result<usize, EdgeListError> {
    let mut tokens = line.split_whitespace();
    let count = number(line_no, &mut tokens, Field::VertexCount)?;
    if count == 0 {
        return Err(EdgeListError::NoVertices);
    }
    Ok(count)
}

/// Parses `source dest weight`; tokens after the weight are ignored.
pub(crate) fn edge(line_no: usize, line: &str) -> Result<(usize, usize, u64), EdgeListError> {
    let mut tokens = line.split_whitespace();
    let source = number(line_no, &mut tokens, Field::Source)?;
    let target = number(line_no, &mut tokens, Field::Destination)?;
    let weight = number(line_no, &mut tokens, Field::Weight)?;
    Ok((source, target, weight))
}

fn number<T: std::str::FromStr>(
    line: usize,
    tokens: &mut SplitWhitespace<'_>,
    field: Field,
) -> Result<T, EdgeListError> {
    let raw = tokens
        .next()
        .ok_or(EdgeListError::MissingField { line, field })?;
    raw.parse().map_err(|_| EdgeListError::InvalidNumber {
        line,
        field,
        raw: raw.to_owned(),
    })
}
