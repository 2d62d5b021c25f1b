use std::{
    fs::File,
    io::{self, BufReader, Read},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::graph::{AdjacencyGraph, MAX_VERTEX_COUNT};

#[derive(Debug, Error)]
pub enum GraphLoadError {
    #[error("cannot read graph file `{}`: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("cannot parse `{token}` as a non-negative integer: {source}")]
    InvalidInteger { token: String, source: ParseIntError },
    #[error("cannot allocate a graph with {vertex_count} vertices (at most {})", MAX_VERTEX_COUNT)]
    TooManyVertices { vertex_count: usize },
    #[error("edge {index} endpoint {vertex} is not between 0 and {}", .vertex_count.saturating_sub(1))]
    VertexOutOfRange {
        index: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("unexpected token `{token}` after the {edge_count} declared edges")]
    TrailingData { token: String, edge_count: usize },
}

impl AdjacencyGraph {
    fn next_usize<'a, I>(tokens: &mut I, expected: &'static str) -> Result<usize, GraphLoadError>
    where
        I: Iterator<Item = &'a str>,
    {
        let token = tokens
            .next()
            .ok_or(GraphLoadError::UnexpectedEof { expected })?;
        token
            .parse()
            .map_err(|source| GraphLoadError::InvalidInteger {
                token: token.to_string(),
                source,
            })
    }

    /// Rejects vertex counts that cannot be a valid graph size.
    pub fn check_vertex_count(vertex_count: usize) -> Result<(), GraphLoadError> {
        if vertex_count > MAX_VERTEX_COUNT {
            return Err(GraphLoadError::TooManyVertices { vertex_count });
        }
        Ok(())
    }

    /// Reads a graph from any byte source in the edge-list text format.
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Self, GraphLoadError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        let mut tokens = contents.split_whitespace();

        let vertex_count = Self::next_usize(&mut tokens, "the vertex count")?;
        let edge_count = Self::next_usize(&mut tokens, "the edge count")?;

        Self::check_vertex_count(vertex_count)?;
        let mut graph = AdjacencyGraph::try_new(vertex_count)
            .map_err(|_| GraphLoadError::TooManyVertices { vertex_count })?;
        for index in 0..edge_count {
            let v = Self::next_usize(&mut tokens, "an edge endpoint")?;
            let w = Self::next_usize(&mut tokens, "an edge endpoint")?;
            for vertex in [v, w] {
                if vertex >= vertex_count {
                    return Err(GraphLoadError::VertexOutOfRange {
                        index,
                        vertex,
                        vertex_count,
                    });
                }
            }
            graph.add_edge(v, w);
        }

        // we should have read all of the file contents by now.
        if let Some(token) = tokens.next() {
            return Err(GraphLoadError::TrailingData {
                token: token.to_string(),
                edge_count,
            });
        }

        info!(vertex_count, edge_count, "graph loaded");
        Ok(graph)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, GraphLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_reader(BufReader::new(file))
    }
}
