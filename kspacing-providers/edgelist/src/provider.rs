//! Loader turning an edge-list text stream into an [`EdgeSource`].

use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use kspacing_core::{Edge, EdgeSource, complete_edge_count};

use crate::{errors::EdgeListError, parse};

/// Complete weighted graph read from an edge-list file.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl EdgeListProvider {
    /// Reads an edge list from `reader`.
    ///
    /// Blank lines are skipped. Edges are numbered in file order, which is
    /// the final tie-breaker between edges of equal weight and endpoints.
    ///
    /// # Errors
    /// Returns [`EdgeListError::EmptyInput`] when the reader holds no
    /// non-blank line, parse errors carrying the 1-based line number,
    /// [`EdgeListError::EdgeCountMismatch`] when the edges do not form a
    /// complete graph, and [`EdgeListError::Io`] on read failures.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use kspacing_core::EdgeSource;
    /// use kspacing_providers_edgelist::EdgeListProvider;
    ///
    /// let raw = "3\n1 2 5\n1 3 1\n2 3 4\n";
    /// let provider = EdgeListProvider::try_from_reader("demo", Cursor::new(raw))
    ///     .expect("edge list must load");
    /// assert_eq!(provider.vertex_count(), 3);
    /// assert_eq!(provider.edges().len(), 3);
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|text| (index + 1, text)));

        let vertex_count = loop {
            let Some(entry) = lines.next() else {
                return Err(EdgeListError::EmptyInput);
            };
            let (line_no, text) = entry?;
            if !text.trim().is_empty() {
                break parse::vertex_count(line_no, &text)?;
            }
        };
        let expected = complete_edge_count(vertex_count)
            .ok_or(EdgeListError::CapacityOverflow { vertex_count })?;

        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for entry in lines {
            let (line_no, text) = entry?;
            if text.trim().is_empty() {
                continue;
            }
            let (source, target, weight) = parse::edge(line_no, &text)?;
            for vertex in [source, target] {
                if vertex == 0 || vertex > vertex_count {
                    return Err(EdgeListError::VertexOutOfRange {
                        line: line_no,
                        vertex,
                        vertex_count,
                    });
                }
            }
            if source == target {
                return Err(EdgeListError::SelfLoop {
                    line: line_no,
                    vertex: source,
                });
            }
            let edge = Edge::new(source, target, weight, edges.len() as u64);
            if !seen.insert((edge.source(), edge.target())) {
                return Err(EdgeListError::DuplicateEdge {
                    line: line_no,
                    source_vertex: edge.source(),
                    target_vertex: edge.target(),
                });
            }
            edges.push(edge);
        }

        if edges.len() != expected {
            return Err(EdgeListError::EdgeCountMismatch {
                expected,
                actual: edges.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            vertex_count,
            edges,
        })
    }

    /// Opens `path` and reads it with [`Self::try_from_reader`].
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] if the file cannot be opened, plus any
    /// error of [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }
}

impl EdgeSource for EdgeListProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
