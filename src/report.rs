//! Presentation of a [`PathFinder`] result.
//!
//! A [`PathReport`] snapshots the adjacency lists, the per-vertex marks,
//! predecessors and paths, and the traversal counters. It renders as plain
//! text through [`Display`] or as JSON through `serde_json`.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::{graph::Graph, search::PathFinder, statistics::TraversalStats};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VertexReport {
    pub vertex: usize,
    pub marked: bool,
    pub edge_to: Option<usize>,
    pub path: Option<Vec<usize>>,
}

/// Text rendering prints `-` in the `edgeTo` column for the source and for
/// unreached vertices, where a plain integer array would show a default `0`.
#[derive(Clone, Debug, Serialize)]
pub struct PathReport {
    pub source: usize,
    pub adjacency: Vec<Vec<usize>>,
    pub vertices: Vec<VertexReport>,
    pub stats: TraversalStats,
}

impl PathReport {
    /// # Panics
    /// If `paths` was not computed on a graph with the same number of vertices.
    pub fn new(graph: &(impl Graph + ?Sized), paths: &PathFinder) -> Self {
        let vertex_count = graph.vertex_count();
        assert_eq!(
            vertex_count,
            paths.vertex_count(),
            "report graph and path finder disagree on the vertex count"
        );

        PathReport {
            source: paths.source(),
            adjacency: (0..vertex_count)
                .map(|v| graph.neighbors(v).to_vec())
                .collect(),
            vertices: (0..vertex_count)
                .map(|v| VertexReport {
                    vertex: v,
                    marked: paths.has_path_to(v),
                    edge_to: paths.predecessor(v),
                    path: paths.path_to(v),
                })
                .collect(),
            stats: paths.stats().clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[usize], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency List:")?;
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{v}: ")?;
            write_joined(f, neighbors, " ")?;
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Marked\tedgeTo")?;
        for entry in &self.vertices {
            match entry.edge_to {
                Some(u) => writeln!(f, "{}\t{u}", entry.marked)?,
                None => writeln!(f, "{}\t-", entry.marked)?,
            }
        }
        writeln!(f)?;

        for entry in &self.vertices {
            write!(f, "{} to {}:  ", self.source, entry.vertex)?;
            match &entry.path {
                Some(path) => write_joined(f, path, "-")?,
                None => f.write_str("not connected")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
