use std::{
    collections::TryReserveError,
    fmt::{self, Display},
};

use crate::graph::Graph;

/// Largest vertex count accepted from untrusted input (files, command line).
/// Vertex ids fit in a `u32`.
pub const MAX_VERTEX_COUNT: usize = u32::MAX as usize;

/// In-memory undirected graph stored as one adjacency list per vertex.
///
/// # Invariants
/// - `adjacency[v]` lists the neighbors of vertex `v` in insertion order.
/// - Each entry of `adjacency[v]` is a valid index into `adjacency`.
/// - Adding the edge `v-w` appends `w` to `adjacency[v]` and `v` to
///   `adjacency[w]`, so the relation is symmetric. A self-loop `v-v` puts `v`
///   twice into its own list.
///
/// # Examples
///
/// ```
/// use depthpaths::graph::{AdjacencyGraph, Graph};
///
/// let graph = AdjacencyGraph::from_edges(3, &[(0, 1), (1, 2)]);
/// assert_eq!(graph.neighbors(1), &[0, 2]);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        AdjacencyGraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Same as [`AdjacencyGraph::new`], but reports an allocation failure
    /// instead of aborting.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(AdjacencyGraph {
            adjacency,
            edge_count: 0,
        })
    }

    /// Creates a graph with `vertex_count` vertices and adds `edges` in order.
    ///
    /// # Panics
    /// If an edge endpoint is not smaller than `vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(vertex_count);
        for &(v, w) in edges {
            graph.add_edge(v, w);
        }
        graph
    }

    /// Adds the undirected edge `v-w`.
    ///
    /// # Panics
    /// If `v` or `w` is not a vertex of the graph.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        self.validate_vertex(v);
        self.validate_vertex(w);

        self.edge_count += 1;
        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    fn validate_vertex(&self, v: usize) {
        assert!(
            v < self.adjacency.len(),
            "vertex {v} is not between 0 and {}",
            self.adjacency.len().saturating_sub(1)
        );
    }
}

impl Graph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, v: usize) -> &[usize] {
        self.validate_vertex(v);
        &self.adjacency[v]
    }
}

impl Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertex_count(),
            self.edge_count
        )?;
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{v}:")?;
            for w in neighbors {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
